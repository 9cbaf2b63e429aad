//! Framebuffers and render targets.
//!
//! The device owns one default [`FrameBuffer`] sized to the display. Each
//! [`RenderTarget`] owns a private one sized to itself; enabling a target points
//! the device at its planes, disabling it points back at the default planes.

mod framebuffer;
mod render_target;

pub use framebuffer::{FrameBuffer, PLANE_BYTES_PER_PIXEL, Plane};
pub use render_target::{ActiveTarget, RenderTarget};
