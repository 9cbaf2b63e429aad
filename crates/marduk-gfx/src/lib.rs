//! Marduk software graphics device.
//!
//! A "null" backend for the marduk graphics abstraction: it honors the same
//! state-machine contract as a GPU-backed device without touching hardware.
//! Buffers, vertex streams, render targets, textures, programs and constant
//! registers all live in host memory, which makes it suitable for headless
//! runs and automated tests.
//!
//! ```
//! use marduk_gfx::buffer::BufferUsage;
//! use marduk_gfx::coords::ColorRgba8;
//! use marduk_gfx::state::ClearFlags;
//! use marduk_gfx::{Device, DeviceInit};
//!
//! let mut device = Device::open(DeviceInit::new(4, 4))?;
//! let vb = device.new_vertex_buffer(16, None, BufferUsage::StaticDraw);
//! device.clear(ClearFlags::COLOR, ColorRgba8::black(), 1.0, 0);
//! device.delete_vertex_buffer(vb);
//! device.close();
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod buffer;
pub mod coords;
pub mod device;
pub mod draw;
pub mod handle;
pub mod logging;
pub mod program;
pub mod state;
pub mod target;
pub mod texture;
pub mod vertex;

pub use device::{Device, DeviceInit};
pub use handle::Handle;
