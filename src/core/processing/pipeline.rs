use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::core::params::{IconParams, MANIFEST_FILE_NAME};
use crate::core::processing::emit::{DensityReport, emit};
use crate::core::processing::padding::add_padding;
use crate::core::raster::Raster;
use crate::error::Result;
use crate::io::loader::load_rgba;
use crate::io::writers::manifest::{IconManifest, write_manifest};

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct IconReport {
    pub padded_width: u32,
    pub padded_height: u32,
    pub densities: Vec<DensityReport>,
    pub manifest: Option<PathBuf>,
}

impl IconReport {
    pub fn files_written(&self) -> usize {
        self.densities.iter().map(|d| d.icons.len()).sum()
    }
}

/// Load -> pad -> emit. Nothing is created on disk if the source is missing.
pub fn run_icon_pipeline(params: &IconParams) -> Result<IconReport> {
    params.validate()?;
    let source = load_rgba(&params.source)?;
    run_icon_pipeline_on(&source, params)
}

/// Same as [`run_icon_pipeline`] for an already decoded source; `params.source`
/// is only recorded in the manifest.
pub fn run_icon_pipeline_on<R: Raster>(source: &R, params: &IconParams) -> Result<IconReport> {
    params.validate_densities()?;
    let started = Instant::now();
    let padded = add_padding(source, params.padding_ratio, params.alpha)?;
    let specs = params.density_specs();

    let densities = emit(
        &padded,
        &specs,
        &params.output_root,
        params.filter,
        params.parallel,
    )?;

    let manifest = if params.manifest {
        let path = params.output_root.join(MANIFEST_FILE_NAME);
        let manifest = IconManifest::new(
            &params.source,
            params.padding_ratio,
            params.alpha,
            params.filter,
            padded.dimensions(),
            &densities,
        );
        write_manifest(&path, &manifest)?;
        Some(path)
    } else {
        None
    };

    debug!("Icon generation took {:?}", started.elapsed());
    info!("Icon processing complete.");

    let (padded_width, padded_height) = padded.dimensions();
    Ok(IconReport {
        padded_width,
        padded_height,
        densities,
        manifest,
    })
}
