use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::raster::Raster;
use crate::error::{Error, Result};
use crate::io::writers::png::write_png_bytes;
use crate::types::{DensitySpec, IconKind, ResampleFilter};

/// One file written by the emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenIcon {
    pub kind: IconKind,
    pub path: PathBuf,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DensityReport {
    pub density: String,
    pub folder: PathBuf,
    pub icons: Vec<WrittenIcon>,
}

/// Encoded PNGs for one density, not yet on disk. The round icon reuses
/// `legacy_png` verbatim.
#[derive(Debug, Clone)]
pub struct RenderedDensity {
    pub spec: DensitySpec,
    pub foreground_png: Vec<u8>,
    pub legacy_png: Vec<u8>,
}

fn ensure_size(size: u32) -> Result<u32> {
    if size == 0 {
        return Err(Error::ZeroSize { size });
    }
    Ok(size)
}

pub fn render_density<R: Raster>(
    padded: &R,
    spec: &DensitySpec,
    filter: ResampleFilter,
) -> Result<RenderedDensity> {
    let fg_size = ensure_size(spec.foreground_size)?;
    let legacy_size = ensure_size(spec.legacy_size)?;

    let foreground_png = padded.resized(fg_size, fg_size, filter)?.encode_png()?;
    let legacy_png = padded
        .resized(legacy_size, legacy_size, filter)?
        .encode_png()?;

    Ok(RenderedDensity {
        spec: spec.clone(),
        foreground_png,
        legacy_png,
    })
}

/// Create `mipmap-<name>` under `output_root` and write the three launcher icons.
pub fn emit_density<R: Raster>(
    padded: &R,
    spec: &DensitySpec,
    output_root: &Path,
    filter: ResampleFilter,
) -> Result<DensityReport> {
    let folder = output_root.join(spec.folder_name());
    fs::create_dir_all(&folder).map_err(|e| Error::write(&folder, e))?;
    debug!("Ensured directory {}", folder.display());

    let rendered = render_density(padded, spec, filter)?;
    let outputs = [
        (IconKind::Foreground, &rendered.foreground_png, spec.foreground_size),
        (IconKind::Legacy, &rendered.legacy_png, spec.legacy_size),
        (IconKind::Round, &rendered.legacy_png, spec.legacy_size),
    ];

    let mut icons = Vec::with_capacity(outputs.len());
    for (kind, bytes, size) in outputs {
        let path = folder.join(kind.file_name());
        write_png_bytes(&path, bytes)?;
        info!("Saved {} ({}x{})", path.display(), size, size);
        icons.push(WrittenIcon { kind, path, size });
    }

    Ok(DensityReport {
        density: spec.name.clone(),
        folder,
        icons,
    })
}

/// Write every density in `specs`. Sequential runs stop at the first failure and
/// leave earlier densities on disk; `parallel` fans out over the rayon pool.
pub fn emit<R: Raster>(
    padded: &R,
    specs: &[DensitySpec],
    output_root: &Path,
    filter: ResampleFilter,
    parallel: bool,
) -> Result<Vec<DensityReport>> {
    if parallel {
        specs
            .par_iter()
            .map(|spec| emit_density(padded, spec, output_root, filter))
            .collect()
    } else {
        specs
            .iter()
            .map(|spec| emit_density(padded, spec, output_root, filter))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::raster::{OPAQUE_WHITE, RgbaRaster};
    use crate::types::{Density, default_density_specs};

    fn png_dimensions(path: &Path) -> (u32, u32) {
        image::image_dimensions(path).unwrap()
    }

    #[test]
    fn test_emit_density_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let padded = RgbaRaster::filled(300, 300, OPAQUE_WHITE);
        let report = emit_density(
            &padded,
            &Density::Hdpi.spec(),
            dir.path(),
            ResampleFilter::Lanczos3,
        )
        .unwrap();

        let folder = dir.path().join("mipmap-hdpi");
        assert_eq!(report.folder, folder);
        assert_eq!(report.icons.len(), 3);
        assert_eq!(png_dimensions(&folder.join("ic_launcher_foreground.png")), (162, 162));
        assert_eq!(png_dimensions(&folder.join("ic_launcher.png")), (72, 72));
        assert_eq!(png_dimensions(&folder.join("ic_launcher_round.png")), (72, 72));
    }

    #[test]
    fn test_round_is_byte_identical_to_legacy() {
        let dir = tempfile::tempdir().unwrap();
        let padded = RgbaRaster::filled(120, 120, [12, 34, 56, 255]);
        emit_density(&padded, &Density::Mdpi.spec(), dir.path(), ResampleFilter::Lanczos3)
            .unwrap();
        let folder = dir.path().join("mipmap-mdpi");
        let legacy = fs::read(folder.join("ic_launcher.png")).unwrap();
        let round = fs::read(folder.join("ic_launcher_round.png")).unwrap();
        assert_eq!(legacy, round);
    }

    #[test]
    fn test_existing_directory_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("mipmap-xhdpi")).unwrap();
        let padded = RgbaRaster::filled(50, 50, OPAQUE_WHITE);
        let report = emit_density(
            &padded,
            &Density::Xhdpi.spec(),
            dir.path(),
            ResampleFilter::Bilinear,
        );
        assert!(report.is_ok());
    }

    #[test]
    fn test_zero_size_rejected_before_writing() {
        let padded = RgbaRaster::filled(10, 10, OPAQUE_WHITE);
        let spec = DensitySpec {
            name: "broken".to_string(),
            foreground_size: 0,
            legacy_size: 48,
        };
        let result = render_density(&padded, &spec, ResampleFilter::Lanczos3);
        assert!(matches!(result, Err(Error::ZeroSize { size: 0 })));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let seq_dir = tempfile::tempdir().unwrap();
        let par_dir = tempfile::tempdir().unwrap();
        let mut img = image::RgbaImage::from_pixel(200, 200, image::Rgba(OPAQUE_WHITE));
        for (x, y, px) in img.enumerate_pixels_mut() {
            if (x / 20 + y / 20) % 2 == 0 {
                *px = image::Rgba([0, 90, 180, 255]);
            }
        }
        let padded = RgbaRaster::from(img);
        let specs = default_density_specs();

        let seq = emit(&padded, &specs, seq_dir.path(), ResampleFilter::Lanczos3, false).unwrap();
        let par = emit(&padded, &specs, par_dir.path(), ResampleFilter::Lanczos3, true).unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(par.len(), 5);

        for (s, p) in seq.iter().zip(&par) {
            assert_eq!(s.density, p.density);
            for (si, pi) in s.icons.iter().zip(&p.icons) {
                assert_eq!(fs::read(&si.path).unwrap(), fs::read(&pi.path).unwrap());
            }
        }
    }
}
