//! Small value types shared across the device: constant vectors, clear colors
//! and pixel extents.
//!
//! Vector/matrix math proper belongs to higher layers; these types only carry
//! data across the device API.

mod color;
mod extent;
mod vec4;

pub use color::ColorRgba8;
pub use extent::Extent;
pub use vec4::Vec4;
