//! Resource handles.
//!
//! Every device resource (buffer, declaration, texture, render target, program)
//! lives in an [`Arena`] owned by the device and is referenced through a copyable
//! [`Handle`]. Handles carry a generation so use-after-delete is caught instead of
//! silently resolving to whatever reused the slot.

mod arena;

pub use arena::{Arena, Handle};
