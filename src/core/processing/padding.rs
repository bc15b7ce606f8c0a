use tracing::info;

use crate::core::params::validate_padding_ratio;
use crate::core::raster::{OPAQUE_WHITE, Raster};
use crate::error::{Error, Result};
use crate::types::AlphaMode;

/// Canvas size for `ratio` of padding on every side: `floor(dim * (1 + 2 * ratio))`.
///
/// Fails when a side exceeds `u32::MAX` or the RGBA8 buffer would not fit in `usize`.
pub fn padded_dimensions(cols: u32, rows: u32, ratio: f64) -> Result<(u32, u32)> {
    let too_large = || Error::InvalidArgument {
        arg: "padding_ratio",
        value: format!("{} (canvas for {}x{} too large)", ratio, cols, rows),
    };

    let scale = 1.0 + 2.0 * ratio;
    let new_cols = (cols as f64 * scale).floor();
    let new_rows = (rows as f64 * scale).floor();
    if !(new_cols <= u32::MAX as f64 && new_rows <= u32::MAX as f64) {
        return Err(too_large());
    }
    let (new_cols, new_rows) = (new_cols as u32, new_rows as u32);

    (new_cols as usize)
        .checked_mul(new_rows as usize)
        .and_then(|px| px.checked_mul(4))
        .ok_or_else(too_large)?;
    Ok((new_cols, new_rows))
}

/// Top-left paste position; floor division, so odd deltas sit one pixel up/left.
pub fn padding_offset(cols: u32, rows: u32, new_cols: u32, new_rows: u32) -> (u32, u32) {
    ((new_cols - cols) / 2, (new_rows - rows) / 2)
}

/// Center `image` on an opaque white canvas grown by `ratio` on each side.
pub fn add_padding<R: Raster>(image: &R, ratio: f64, mode: AlphaMode) -> Result<R> {
    validate_padding_ratio(ratio)?;

    let (cols, rows) = image.dimensions();
    let (new_cols, new_rows) = padded_dimensions(cols, rows, ratio)?;
    let (pad_cols, pad_rows) = padding_offset(cols, rows, new_cols, new_rows);

    info!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );
    info!("Final dimensions: {}x{}", new_cols, new_rows);

    let mut canvas = R::filled(new_cols, new_rows, OPAQUE_WHITE);
    image.composite_onto(&mut canvas, pad_cols, pad_rows, mode);
    Ok(canvas)
}
