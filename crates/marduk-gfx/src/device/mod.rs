//! The software graphics device.
//!
//! [`Device`] is the single owner of device state. Its operations are split by
//! concern:
//! - `context`: lifecycle, framebuffer, clears, masks and ignored state
//! - `buffers`: vertex/index buffer store and map/unmap
//! - `vertex`: declarations, stream binding and draws
//! - `targets`: textures and render targets
//! - `programs`: program store and constant banks

mod buffers;
mod context;
mod init;
mod programs;
mod targets;
mod vertex;
mod window;

pub use context::Device;
pub use init::DeviceInit;
pub use window::WindowParam;
