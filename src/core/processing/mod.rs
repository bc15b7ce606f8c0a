pub mod emit;
pub mod padding;
pub mod pipeline;
pub mod resize;
