//! I/O layer: the source image loader and `writers` for PNG icons and the
//! JSON manifest sidecar.
pub mod loader;
pub use loader::load_rgba;

pub mod writers;
