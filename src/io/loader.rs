use std::path::Path;

use image::ImageReader;
use tracing::{debug, info};

use crate::core::raster::RgbaRaster;
use crate::error::{Error, Result};

/// Decode `path` into RGBA8.
///
/// Existence is checked up front so a missing file surfaces as
/// `Error::SourceNotFound` rather than a bare I/O error. The format is sniffed
/// from the file contents, falling back to the extension.
pub fn load_rgba(path: &Path) -> Result<RgbaRaster> {
    if !path.exists() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    info!("Processing icon from {}", path.display());
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    debug!("Detected format: {:?}", reader.format());
    let decoded = reader.decode()?;
    debug!(
        "Decoded {}x{} {:?}",
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(RgbaRaster::from(decoded))
}
