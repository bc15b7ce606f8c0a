#![doc = r#"
MIPGEN — Android launcher icon generator.

This crate turns a single source image into the launcher icon set an Android app
ships in `res/`: an adaptive-icon foreground, a legacy icon and a round icon for
each of the five mipmap densities. The source is first centered on an opaque white
canvas with uniform padding so the subject stays inside the adaptive-icon safe zone,
then resampled (Lanczos3 by default) to every target size.

It powers the `mipgen` CLI and can be embedded in your own build tooling.

Output layout
-------------
```text
<output_root>/
  mipmap-mdpi/     ic_launcher_foreground.png (108)  ic_launcher.png (48)   ic_launcher_round.png (48)
  mipmap-hdpi/     ic_launcher_foreground.png (162)  ic_launcher.png (72)   ic_launcher_round.png (72)
  mipmap-xhdpi/    ic_launcher_foreground.png (216)  ic_launcher.png (96)   ic_launcher_round.png (96)
  mipmap-xxhdpi/   ic_launcher_foreground.png (324)  ic_launcher.png (144)  ic_launcher_round.png (144)
  mipmap-xxxhdpi/  ic_launcher_foreground.png (432)  ic_launcher.png (192)  ic_launcher_round.png (192)
```

The round icon is the legacy bitmap written a second time; no circular mask is
applied, so its corners stay white.

Quick start: generate from a file
---------------------------------
```rust,no_run
use mipgen::{IconParams, generate_icons};

fn main() -> mipgen::Result<()> {
    let params = IconParams::new("logo.png", "app/src/main/res");
    let report = generate_icons(&params)?;
    println!("wrote {} files", report.files_written());
    Ok(())
}
```

Generate from an in-memory image
--------------------------------
```rust,no_run
use mipgen::{AlphaMode, IconParams, Raster, RgbaRaster, generate_icons_from_image};

fn main() -> mipgen::Result<()> {
    let source = RgbaRaster::filled(512, 512, [220, 40, 60, 255]);
    let mut params = IconParams::new("generated", "/tmp/res");
    params.padding_ratio = 0.15;
    params.alpha = AlphaMode::Replace;
    generate_icons_from_image(&source, &params)?;
    Ok(())
}
```

Error handling
--------------
All public functions return `mipgen::Result<T>`. A missing source is reported as
`Error::SourceNotFound` before anything is written; the CLI treats it as a clean
exit.

```rust,no_run
use mipgen::{Error, IconParams, generate_icons};

fn main() {
    match generate_icons(&IconParams::new("/missing.png", "res")) {
        Ok(report) => println!("{} files", report.files_written()),
        Err(Error::SourceNotFound { path }) => eprintln!("no source at {}", path.display()),
        Err(other) => eprintln!("failed: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `Density`, `DensitySpec`, `IconKind`, `ResampleFilter`, `AlphaMode`.
- [`core`] — the `Raster` trait, parameters, and padding/resize/emit steps.
- [`io`] — source loader and PNG/manifest writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::IconParams;
pub use crate::core::raster::{Raster, RgbaRaster};
pub use error::{Error, Result};
pub use types::{AlphaMode, Density, DensitySpec, IconKind, ResampleFilter, default_density_specs};

// High-level API re-exports
pub use api::{
    DensityReport, IconReport, WrittenIcon, generate_icons, generate_icons_from_image,
    load_image, pad_image, render_icons,
};
