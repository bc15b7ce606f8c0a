use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use crate::core::processing::emit::DensityReport;
use crate::error::{Error, Result};
use crate::types::{AlphaMode, ResampleFilter};

/// JSON sidecar describing one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct IconManifest {
    pub generated_at: String,
    pub source: PathBuf,
    pub padding_ratio: f64,
    pub alpha: AlphaMode,
    pub filter: ResampleFilter,
    pub padded_width: u32,
    pub padded_height: u32,
    pub densities: Vec<DensityReport>,
}

impl IconManifest {
    pub fn new(
        source: &Path,
        padding_ratio: f64,
        alpha: AlphaMode,
        filter: ResampleFilter,
        padded_dimensions: (u32, u32),
        densities: &[DensityReport],
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            source: source.to_path_buf(),
            padding_ratio,
            alpha,
            filter,
            padded_width: padded_dimensions.0,
            padded_height: padded_dimensions.1,
            densities: densities.to_vec(),
        }
    }
}

pub fn write_manifest(output: &Path, manifest: &IconManifest) -> Result<()> {
    let json_string = serde_json::to_string_pretty(manifest)?;
    std::fs::write(output, json_string).map_err(|e| Error::write(output, e))?;
    info!("Manifest written to: {}", output.display());
    Ok(())
}
