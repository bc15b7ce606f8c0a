use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mipgen::{Error, IconParams, generate_icons};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Merge the optional JSON config with explicit flags; flags win.
pub fn build_params(args: &CliArgs) -> Result<IconParams, AppError> {
    let mut params = match &args.config {
        Some(path) => IconParams::from_json_file(path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?,
        None => IconParams::default(),
    };

    if let Some(input) = &args.input {
        params.source = input.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        params.output_root = output_dir.clone();
    }
    if let Some(padding) = args.padding {
        params.padding_ratio = padding;
    }
    if !args.density.is_empty() {
        params.densities = args.density.clone();
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    if let Some(alpha) = args.alpha {
        params.alpha = alpha;
    }
    params.parallel |= args.parallel;
    params.manifest |= args.manifest;

    params.validate()?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = build_params(&args)?;
    info!(
        "Output directory: {} (padding={}, filter={}, alpha={})",
        params.output_root.display(),
        params.padding_ratio,
        params.filter,
        params.alpha
    );

    match generate_icons(&params) {
        Ok(report) => {
            info!(
                "Wrote {} files across {} densities",
                report.files_written(),
                report.densities.len()
            );
            Ok(())
        }
        Err(Error::SourceNotFound { path }) => {
            error!("Error: Source image not found at {}", path.display());
            Ok(())
        }
        Err(e) => Err(AppError::from(e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mipgen::{AlphaMode, Density, ResampleFilter};
    use std::path::PathBuf;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_only() {
        let params = build_params(&parse(&["mipgen", "-i", "logo.png", "--padding", "0"])).unwrap();
        assert_eq!(params.source, PathBuf::from("logo.png"));
        assert_eq!(params.output_root, PathBuf::from("app/src/main/res"));
        assert_eq!(params.padding_ratio, 0.0);
        assert_eq!(params.densities, Density::ALL.to_vec());
    }

    #[test]
    fn test_missing_input() {
        let result = build_params(&parse(&["mipgen"]));
        assert!(matches!(
            result,
            Err(AppError::Icon(Error::MissingArgument { ref arg })) if arg == "--input"
        ));
    }

    #[test]
    fn test_negative_padding_rejected() {
        let result = build_params(&parse(&["mipgen", "-i", "a.png", "--padding=-1"]));
        assert!(matches!(
            result,
            Err(AppError::Icon(Error::InvalidArgument { .. }))
        ));
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("icons.json");
        std::fs::write(
            &config,
            r#"{"source": "from_config.png", "padding_ratio": 0.1, "filter": "mitchell", "manifest": true}"#,
        )
        .unwrap();
        let config_arg = config.to_string_lossy().to_string();

        let params = build_params(&parse(&[
            "mipgen",
            "--config",
            &config_arg,
            "--alpha",
            "replace",
            "--padding",
            "0.3",
        ]))
        .unwrap();
        assert_eq!(params.source, PathBuf::from("from_config.png"));
        assert_eq!(params.padding_ratio, 0.3);
        assert_eq!(params.filter, ResampleFilter::Mitchell);
        assert_eq!(params.alpha, AlphaMode::Replace);
        assert!(params.manifest);
    }

    #[test]
    fn test_bad_config_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("broken.json");
        std::fs::write(&config, "{ not json").unwrap();
        let config_arg = config.to_string_lossy().to_string();
        let result = build_params(&parse(&["mipgen", "--config", &config_arg]));
        assert!(matches!(result, Err(AppError::Config { .. })));
    }

    #[test]
    fn test_missing_source_exits_cleanly_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png").to_string_lossy().to_string();
        let out = dir.path().join("res");
        let out_arg = out.to_string_lossy().to_string();
        let result = run(parse(&["mipgen", "-i", &missing, "-o", &out_arg]));
        assert!(result.is_ok());
        assert!(!out.exists());
    }
}
