//! Vertex and index buffer storage.
//!
//! Both buffer kinds own a fixed-size byte vector and support scoped mapping:
//! `map` hands out a snapshot of the contents, `unmap` writes it back.

mod storage;

pub use storage::{BufferAccess, BufferStorage, BufferUsage, IndexBuffer, VertexBuffer};
