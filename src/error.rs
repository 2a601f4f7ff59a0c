//! Presentation-layer errors
//!
//! The simulation cannot fail; everything here comes from windowing or GPU
//! setup and ends the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PongError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}
