use crate::buffer::{BufferAccess, BufferUsage, IndexBuffer, VertexBuffer};
use crate::handle::Handle;

use super::Device;

const VERTEX_BUFFER: &str = "vertex buffer";
const INDEX_BUFFER: &str = "index buffer";

impl Device {
    // ── vertex buffers ────────────────────────────────────────────────────

    /// Creates a vertex buffer of `size` bytes, optionally initialized from `data`.
    #[track_caller]
    pub fn new_vertex_buffer(
        &mut self,
        size: usize,
        data: Option<&[u8]>,
        usage: BufferUsage,
    ) -> Handle<VertexBuffer> {
        self.vertex_buffers.insert(VertexBuffer::new(size, data, usage))
    }

    /// # Panics
    /// Panics if the buffer is still mapped.
    #[track_caller]
    pub fn delete_vertex_buffer(&mut self, buffer: Handle<VertexBuffer>) {
        let vb = self.vertex_buffers.expect(buffer, VERTEX_BUFFER);
        assert!(!vb.is_mapped(), "vertex buffer {buffer:?} deleted while mapped");
        self.vertex_buffers.remove(buffer);
    }

    #[track_caller]
    pub fn vertex_buffer(&self, buffer: Handle<VertexBuffer>) -> &VertexBuffer {
        self.vertex_buffers.expect(buffer, VERTEX_BUFFER)
    }

    #[track_caller]
    pub fn set_vertex_buffer_data(
        &mut self,
        buffer: Handle<VertexBuffer>,
        data: &[u8],
        usage: BufferUsage,
    ) {
        self.vertex_buffers.expect_mut(buffer, VERTEX_BUFFER).set_data(data, usage);
    }

    #[track_caller]
    pub fn set_vertex_buffer_sub_data(
        &mut self,
        buffer: Handle<VertexBuffer>,
        offset: usize,
        data: &[u8],
    ) {
        self.vertex_buffers
            .expect_mut(buffer, VERTEX_BUFFER)
            .set_sub_data(offset, data);
    }

    /// Returns a snapshot of the buffer contents for mutation until
    /// [`unmap_vertex_buffer`](Self::unmap_vertex_buffer).
    #[track_caller]
    pub fn map_vertex_buffer(
        &mut self,
        buffer: Handle<VertexBuffer>,
        access: BufferAccess,
    ) -> &mut [u8] {
        log::debug!("map vertex buffer {buffer:?} ({access:?})");
        self.vertex_buffers.expect_mut(buffer, VERTEX_BUFFER).map(access)
    }

    /// The outstanding snapshot of a mapped vertex buffer.
    #[track_caller]
    pub fn mapped_vertex_buffer(&mut self, buffer: Handle<VertexBuffer>) -> Option<&mut [u8]> {
        self.vertex_buffers.expect_mut(buffer, VERTEX_BUFFER).mapped_mut()
    }

    #[track_caller]
    pub fn unmap_vertex_buffer(&mut self, buffer: Handle<VertexBuffer>) -> bool {
        log::debug!("unmap vertex buffer {buffer:?}");
        self.vertex_buffers.expect_mut(buffer, VERTEX_BUFFER).unmap()
    }

    // ── index buffers ─────────────────────────────────────────────────────

    #[track_caller]
    pub fn new_index_buffer(
        &mut self,
        size: usize,
        data: Option<&[u8]>,
        usage: BufferUsage,
    ) -> Handle<IndexBuffer> {
        self.index_buffers.insert(IndexBuffer::new(size, data, usage))
    }

    /// # Panics
    /// Panics if the buffer is still mapped.
    #[track_caller]
    pub fn delete_index_buffer(&mut self, buffer: Handle<IndexBuffer>) {
        let ib = self.index_buffers.expect(buffer, INDEX_BUFFER);
        assert!(!ib.is_mapped(), "index buffer {buffer:?} deleted while mapped");
        self.index_buffers.remove(buffer);
    }

    #[track_caller]
    pub fn index_buffer(&self, buffer: Handle<IndexBuffer>) -> &IndexBuffer {
        self.index_buffers.expect(buffer, INDEX_BUFFER)
    }

    #[track_caller]
    pub fn set_index_buffer_data(
        &mut self,
        buffer: Handle<IndexBuffer>,
        data: &[u8],
        usage: BufferUsage,
    ) {
        self.index_buffers.expect_mut(buffer, INDEX_BUFFER).set_data(data, usage);
    }

    #[track_caller]
    pub fn set_index_buffer_sub_data(
        &mut self,
        buffer: Handle<IndexBuffer>,
        offset: usize,
        data: &[u8],
    ) {
        self.index_buffers.expect_mut(buffer, INDEX_BUFFER).set_sub_data(offset, data);
    }

    #[track_caller]
    pub fn map_index_buffer(
        &mut self,
        buffer: Handle<IndexBuffer>,
        access: BufferAccess,
    ) -> &mut [u8] {
        log::debug!("map index buffer {buffer:?} ({access:?})");
        self.index_buffers.expect_mut(buffer, INDEX_BUFFER).map(access)
    }

    #[track_caller]
    pub fn mapped_index_buffer(&mut self, buffer: Handle<IndexBuffer>) -> Option<&mut [u8]> {
        self.index_buffers.expect_mut(buffer, INDEX_BUFFER).mapped_mut()
    }

    #[track_caller]
    pub fn unmap_index_buffer(&mut self, buffer: Handle<IndexBuffer>) -> bool {
        log::debug!("unmap index buffer {buffer:?}");
        self.index_buffers.expect_mut(buffer, INDEX_BUFFER).unmap()
    }
}
