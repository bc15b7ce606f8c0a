//! High-level, ergonomic library API: generate a full icon set from a path or an
//! in-memory image, pad a single image, or render one density without touching
//! disk. Prefer these entrypoints over the low-level processing modules.
use std::path::Path;

use crate::core::params::IconParams;
use crate::core::processing::emit::{RenderedDensity, render_density};
use crate::core::processing::padding::add_padding;
use crate::core::processing::pipeline::{run_icon_pipeline, run_icon_pipeline_on};
use crate::core::raster::{Raster, RgbaRaster};
use crate::error::Result;
use crate::io::loader::load_rgba;
use crate::types::{AlphaMode, DensitySpec, ResampleFilter};

pub use crate::core::processing::emit::{DensityReport, WrittenIcon};
pub use crate::core::processing::pipeline::IconReport;

/// Load `params.source`, pad it, and write every selected density under
/// `params.output_root`.
///
/// Returns `Error::SourceNotFound` without creating anything when the source
/// path does not exist.
pub fn generate_icons(params: &IconParams) -> Result<IconReport> {
    run_icon_pipeline(params)
}

/// Like [`generate_icons`] for a caller that already holds the decoded image.
pub fn generate_icons_from_image<R: Raster>(source: &R, params: &IconParams) -> Result<IconReport> {
    run_icon_pipeline_on(source, params)
}

/// Decode an image file into RGBA8.
pub fn load_image(path: &Path) -> Result<RgbaRaster> {
    load_rgba(path)
}

/// Center `image` on an opaque white canvas grown by `ratio` on every side.
pub fn pad_image<R: Raster>(image: &R, ratio: f64, alpha: AlphaMode) -> Result<R> {
    add_padding(image, ratio, alpha)
}

/// Resample an already padded image for one density and encode the PNGs in memory.
pub fn render_icons<R: Raster>(
    padded: &R,
    spec: &DensitySpec,
    filter: ResampleFilter,
) -> Result<RenderedDensity> {
    render_density(padded, spec, filter)
}
