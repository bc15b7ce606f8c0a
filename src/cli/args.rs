use clap::Parser;
use std::path::PathBuf;

use mipgen::{AlphaMode, Density, ResampleFilter};

#[derive(Parser, Debug)]
#[command(
    name = "mipgen",
    version,
    about = "Generate padded Android launcher icons for every mipmap density"
)]
pub struct CliArgs {
    /// Source image (PNG, JPEG, WebP, GIF or BMP)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Android `res` directory that receives the mipmap-* folders [default: app/src/main/res]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Padding added on each side, as a fraction of the source size [default: 0.25]
    #[arg(long)]
    pub padding: Option<f64>,

    /// Density to generate; repeat for several. Omit for all five
    #[arg(long, value_enum)]
    pub density: Vec<Density>,

    /// Resampling filter [default: lanczos3]
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// How transparent source pixels land on the white canvas [default: blend]
    #[arg(long, value_enum)]
    pub alpha: Option<AlphaMode>,

    /// Process densities concurrently
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Write icon_manifest.json into the output directory
    #[arg(long, default_value_t = false)]
    pub manifest: bool,

    /// JSON config with the same fields; explicit flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
