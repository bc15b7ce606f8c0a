//! Shared types and enums used across mipgen.
//! Includes `Density` and its `DensitySpec` size table, `IconKind` file naming,
//! `ResampleFilter`, and the `AlphaMode` used when pasting onto the padded canvas.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Android launcher density buckets, ordered by increasing scale factor.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Multiplier relative to mdpi (1x).
    pub fn scale_factor(&self) -> f64 {
        match self {
            Density::Mdpi => 1.0,
            Density::Hdpi => 1.5,
            Density::Xhdpi => 2.0,
            Density::Xxhdpi => 3.0,
            Density::Xxxhdpi => 4.0,
        }
    }

    pub fn spec(&self) -> DensitySpec {
        let (foreground_size, legacy_size) = match self {
            Density::Mdpi => (108, 48),
            Density::Hdpi => (162, 72),
            Density::Xhdpi => (216, 96),
            Density::Xxhdpi => (324, 144),
            Density::Xxxhdpi => (432, 192),
        };
        DensitySpec {
            name: self.name().to_string(),
            foreground_size,
            legacy_size,
        }
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One row of the size table: folder suffix plus the two square pixel sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensitySpec {
    pub name: String,
    pub foreground_size: u32,
    pub legacy_size: u32,
}

impl DensitySpec {
    pub fn folder_name(&self) -> String {
        format!("mipmap-{}", self.name)
    }
}

/// The full five-tier table, mdpi first.
pub fn default_density_specs() -> Vec<DensitySpec> {
    Density::ALL.iter().map(Density::spec).collect()
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum IconKind {
    Foreground,
    Legacy,
    Round,
}

impl IconKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            IconKind::Foreground => "ic_launcher_foreground.png",
            IconKind::Legacy => "ic_launcher.png",
            IconKind::Round => "ic_launcher_round.png",
        }
    }
}

impl std::fmt::Display for IconKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconKind::Foreground => write!(f, "Foreground"),
            IconKind::Legacy => write!(f, "Legacy"),
            IconKind::Round => write!(f, "Round"),
        }
    }
}

#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    CatmullRom,
    Mitchell,
    #[default]
    Lanczos3,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "Nearest"),
            ResampleFilter::Bilinear => write!(f, "Bilinear"),
            ResampleFilter::CatmullRom => write!(f, "CatmullRom"),
            ResampleFilter::Mitchell => write!(f, "Mitchell"),
            ResampleFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

/// How source pixels land on the white padding canvas.
///
/// `Blend` composites "source over" so translucent pixels pick up the white
/// background and the result is fully opaque. `Replace` copies pixels verbatim,
/// so transparent regions of the source stay transparent on the canvas.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AlphaMode {
    #[default]
    Blend,
    Replace,
}

impl std::fmt::Display for AlphaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlphaMode::Blend => write!(f, "Blend"),
            AlphaMode::Replace => write!(f, "Replace"),
        }
    }
}
