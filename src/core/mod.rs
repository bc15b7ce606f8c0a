//! Core building blocks: the raster capability trait, run parameters, and the
//! padding/resize/emit processing steps. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
pub mod raster;
