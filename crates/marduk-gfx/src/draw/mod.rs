//! Draw calls.
//!
//! No rasterization happens here. An indexed draw runs the vertex-fetch stage
//! only: attribute data is gathered from the bound streams into per-stream
//! buffers in draw order, which is what downstream consumers and tests inspect.

mod gather;
mod index;

pub(crate) use gather::gather;
pub use index::decode_index;

/// Primitive topology of a draw. Recorded for diagnostics only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}
