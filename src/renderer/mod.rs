//! wgpu rendering module
//!
//! Flat-colored triangles in pixel space, rebuilt from the draw list each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
