//! Minimal raster capability interface consumed by padding and emission, plus
//! the `image`-backed RGBA implementation used in practice.
use image::{DynamicImage, Rgba, RgbaImage, imageops};

use crate::core::processing::resize::resize_rgba8;
use crate::error::{Error, Result};
use crate::io::writers::png::encode_rgba_png;
use crate::types::{AlphaMode, ResampleFilter};

pub const OPAQUE_WHITE: [u8; 4] = [255, 255, 255, 255];

/// The operations the icon pipeline needs from an image. Every transform
/// returns a new value; nothing mutates a raster except compositing onto a canvas.
pub trait Raster: Sized + Send + Sync {
    fn dimensions(&self) -> (u32, u32);

    fn pixel(&self, x: u32, y: u32) -> [u8; 4];

    /// A `width` x `height` raster with every pixel set to `rgba`.
    fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self;

    fn resized(&self, width: u32, height: u32, filter: ResampleFilter) -> Result<Self>;

    /// Paste `self` onto `canvas` with its top-left corner at (`x`, `y`).
    /// Pixels falling outside the canvas are clipped.
    fn composite_onto(&self, canvas: &mut Self, x: u32, y: u32, mode: AlphaMode);

    fn encode_png(&self) -> Result<Vec<u8>>;

    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }
}

/// 8-bit RGBA raster backed by `image::RgbaImage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaRaster {
    inner: RgbaImage,
}

impl RgbaRaster {
    pub fn new(inner: RgbaImage) -> Self {
        Self { inner }
    }

    /// Build from a tightly packed RGBA byte buffer (`width * height * 4` bytes).
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let len = data.len();
        RgbaImage::from_raw(width, height, data)
            .map(Self::new)
            .ok_or_else(|| Error::InvalidArgument {
                arg: "raw_rgba",
                value: format!("{} bytes for {}x{}", len, width, height),
            })
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.inner
    }

    pub fn into_image(self) -> RgbaImage {
        self.inner
    }
}

impl From<RgbaImage> for RgbaRaster {
    fn from(inner: RgbaImage) -> Self {
        Self::new(inner)
    }
}

/// Any decoded colour type (grey, paletted, RGB, 16-bit) is expanded to RGBA8;
/// inputs without alpha get a fully opaque channel.
impl From<DynamicImage> for RgbaRaster {
    fn from(img: DynamicImage) -> Self {
        Self::new(img.into_rgba8())
    }
}

impl Raster for RgbaRaster {
    fn dimensions(&self) -> (u32, u32) {
        self.inner.dimensions()
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.inner.get_pixel(x, y).0
    }

    fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    fn resized(&self, width: u32, height: u32, filter: ResampleFilter) -> Result<Self> {
        let (src_w, src_h) = self.dimensions();
        let data = resize_rgba8(self.inner.as_raw(), src_w, src_h, width, height, filter)?;
        Self::from_raw(width, height, data)
    }

    fn composite_onto(&self, canvas: &mut Self, x: u32, y: u32, mode: AlphaMode) {
        match mode {
            AlphaMode::Blend => {
                imageops::overlay(&mut canvas.inner, &self.inner, x as i64, y as i64)
            }
            AlphaMode::Replace => {
                imageops::replace(&mut canvas.inner, &self.inner, x as i64, y as i64)
            }
        }
    }

    fn encode_png(&self) -> Result<Vec<u8>> {
        let (width, height) = self.dimensions();
        encode_rgba_png(self.inner.as_raw(), width, height)
    }
}
