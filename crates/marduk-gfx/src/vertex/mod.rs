//! Vertex formats and stream slots.
//!
//! - [`VertexDeclaration`] compiles a sparse element list into a fixed slot table
//! - [`VertexStream`] is the device-side binding of one slot to buffer memory

mod declaration;
mod stream;
mod types;

pub use declaration::{ElementLayout, MAX_VERTEX_STREAM_COUNT, VertexDeclaration, VertexElement};
pub use stream::{StreamSource, VertexStream};
pub use types::ElementType;
