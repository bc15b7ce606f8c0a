use fast_image_resize::{
    FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image,
};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

pub fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Resample a packed RGBA8 buffer. Alpha is premultiplied for the convolution
/// and divided back out afterwards, so the channel survives intact.
pub fn resize_rgba8(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    if target_cols == 0 || target_rows == 0 {
        return Err(Error::ZeroSize {
            size: target_cols.min(target_rows),
        });
    }
    if original_cols == 0 || original_rows == 0 {
        return Err(Error::InvalidArgument {
            arg: "source_dimensions",
            value: format!("{}x{}", original_cols, original_rows),
        });
    }
    if target_cols > original_cols || target_rows > original_rows {
        warn!(
            "Upscaling {}x{} to {}x{}; source is smaller than the target icon",
            original_cols, original_rows, target_cols, target_rows
        );
    }
    debug!(
        "Resizing {}x{} -> {}x{} ({})",
        original_cols, original_rows, target_cols, target_rows, filter
    );

    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        data.to_vec(),
        PixelType::U8x4,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    Ok(dst_image.into_vec())
}
