use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{AlphaMode, Density, DensitySpec, ResampleFilter};

pub const DEFAULT_PADDING_RATIO: f64 = 0.25;
pub const DEFAULT_OUTPUT_ROOT: &str = "app/src/main/res";
pub const MANIFEST_FILE_NAME: &str = "icon_manifest.json";

/// Icon generation parameters suitable for config files and CLI presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconParams {
    /// Source raster; must exist before anything is written
    pub source: PathBuf,
    /// Android `res` directory receiving the `mipmap-*` folders
    pub output_root: PathBuf,
    /// Padding on each side as a fraction of the source dimension
    pub padding_ratio: f64,
    pub densities: Vec<Density>,
    pub filter: ResampleFilter,
    pub alpha: AlphaMode,
    /// Fan densities out over the rayon pool
    pub parallel: bool,
    /// Write `icon_manifest.json` next to the mipmap folders
    pub manifest: bool,
}

impl Default for IconParams {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            padding_ratio: DEFAULT_PADDING_RATIO,
            densities: Density::ALL.to_vec(),
            filter: ResampleFilter::Lanczos3,
            alpha: AlphaMode::Blend,
            parallel: false,
            manifest: false,
        }
    }
}

impl IconParams {
    pub fn new(source: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_root: output_root.into(),
            ..Self::default()
        }
    }

    /// Read a (possibly partial) JSON config; absent fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params = serde_json::from_str(&text)?;
        Ok(params)
    }

    /// Size table rows for the selected densities, deduplicated in scale order.
    pub fn density_specs(&self) -> Vec<DensitySpec> {
        let mut densities = self.densities.clone();
        densities.sort();
        densities.dedup();
        densities.iter().map(Density::spec).collect()
    }

    pub fn validate(&self) -> Result<()> {
        validate_padding_ratio(self.padding_ratio)?;
        if self.source.as_os_str().is_empty() {
            return Err(Error::MissingArgument {
                arg: "--input".to_string(),
            });
        }
        self.validate_densities()
    }

    pub fn validate_densities(&self) -> Result<()> {
        if self.densities.is_empty() {
            return Err(Error::MissingArgument {
                arg: "--density".to_string(),
            });
        }
        Ok(())
    }
}

pub fn validate_padding_ratio(ratio: f64) -> Result<()> {
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(Error::InvalidArgument {
            arg: "padding_ratio",
            value: ratio.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = IconParams::default();
        assert_eq!(params.padding_ratio, 0.25);
        assert_eq!(params.output_root, PathBuf::from("app/src/main/res"));
        assert_eq!(params.densities.len(), 5);
        assert_eq!(params.filter, ResampleFilter::Lanczos3);
        assert_eq!(params.alpha, AlphaMode::Blend);
        assert!(!params.parallel);
        assert!(!params.manifest);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let params: IconParams =
            serde_json::from_str(r#"{"source": "logo.png", "densities": ["xxxhdpi", "mdpi"]}"#)
                .unwrap();
        assert_eq!(params.source, PathBuf::from("logo.png"));
        assert_eq!(params.padding_ratio, DEFAULT_PADDING_RATIO);
        let names: Vec<String> = params.density_specs().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["mdpi", "xxxhdpi"]);
    }

    #[test]
    fn test_duplicate_densities_collapse() {
        let mut params = IconParams::new("a.png", "res");
        params.densities = vec![Density::Hdpi, Density::Hdpi];
        assert_eq!(params.density_specs().len(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        for ratio in [-0.1, f64::NAN, f64::INFINITY] {
            let mut params = IconParams::new("a.png", "res");
            params.padding_ratio = ratio;
            assert!(matches!(
                params.validate(),
                Err(Error::InvalidArgument { arg: "padding_ratio", .. })
            ));
        }
    }

    #[test]
    fn test_validate_requires_source_and_densities() {
        assert!(matches!(
            IconParams::default().validate(),
            Err(Error::MissingArgument { .. })
        ));
        let mut params = IconParams::new("a.png", "res");
        params.densities.clear();
        assert!(matches!(params.validate(), Err(Error::MissingArgument { .. })));
        params.densities.push(Density::Mdpi);
        assert!(params.validate().is_ok());
    }
}
