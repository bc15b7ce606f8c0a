use std::fs;
use std::path::Path;

use image::ImageEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};

use crate::error::{Error, Result};

/// Encode a packed RGBA8 buffer as PNG. Settings are fixed so equal pixels
/// always produce equal bytes.
pub fn encode_rgba_png(data: &[u8], cols: u32, rows: u32) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Default, PngFilterType::Adaptive);
    encoder.write_image(data, cols, rows, image::ExtendedColorType::Rgba8)?;
    Ok(buf)
}

pub fn write_png_bytes(output: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(output, bytes).map_err(|e| Error::write(output, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_png_decodes_to_same_pixels() {
        let data: Vec<u8> = (0..3 * 2 * 4).map(|i| (i * 10) as u8).collect();
        let bytes = encode_rgba_png(&data, 3, 2).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.into_raw(), data);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let data = vec![255u8; 16 * 16 * 4];
        assert_eq!(
            encode_rgba_png(&data, 16, 16).unwrap(),
            encode_rgba_png(&data, 16, 16).unwrap()
        );
    }

    #[test]
    fn test_write_into_missing_dir_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nope").join("icon.png");
        let err = write_png_bytes(&target, b"x").unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
