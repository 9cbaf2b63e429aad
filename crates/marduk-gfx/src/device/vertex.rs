use crate::buffer::{IndexBuffer, VertexBuffer};
use crate::draw::{self, PrimitiveType};
use crate::handle::Handle;
use crate::vertex::{
    ElementType, MAX_VERTEX_STREAM_COUNT, StreamSource, VertexDeclaration, VertexElement,
    VertexStream,
};

use super::Device;

const DECLARATION: &str = "vertex declaration";

impl Device {
    // ── declarations ──────────────────────────────────────────────────────

    /// Compiles `elements` into a declaration.
    ///
    /// # Panics
    /// Panics if two elements share a stream id.
    #[track_caller]
    pub fn new_vertex_declaration(
        &mut self,
        elements: &[VertexElement],
    ) -> Handle<VertexDeclaration> {
        self.declarations.insert(VertexDeclaration::new(elements))
    }

    #[track_caller]
    pub fn delete_vertex_declaration(&mut self, declaration: Handle<VertexDeclaration>) {
        self.declarations.expect_remove(declaration, DECLARATION);
    }

    #[track_caller]
    pub fn vertex_declaration(&self, declaration: Handle<VertexDeclaration>) -> &VertexDeclaration {
        self.declarations.expect(declaration, DECLARATION)
    }

    /// Binds every element of `declaration` to its stream, reading interleaved
    /// vertices from `buffer`.
    ///
    /// All streams share the declaration's stride; each element's source offset is
    /// the running sum of the element sizes before it.
    #[track_caller]
    pub fn enable_vertex_declaration(
        &mut self,
        declaration: Handle<VertexDeclaration>,
        buffer: Handle<VertexBuffer>,
    ) {
        self.assert_open();
        self.vertex_buffers.expect(buffer, "vertex buffer");
        let decl = self.declarations.expect(declaration, DECLARATION);

        let stride = decl.stride();
        for layout in decl.layout() {
            let element = layout.element;
            let id = element.stream as usize;
            self.streams[id].bind(
                id,
                element.byte_size(),
                stride,
                StreamSource { buffer, offset: layout.offset },
            );
        }
    }

    /// Disables every stream the declaration uses.
    #[track_caller]
    pub fn disable_vertex_declaration(&mut self, declaration: Handle<VertexDeclaration>) {
        self.assert_open();
        let decl = self.declarations.expect(declaration, DECLARATION);
        for element in decl.elements().filter(|e| e.size > 0) {
            self.streams[element.stream as usize].unbind();
        }
    }

    // ── streams ───────────────────────────────────────────────────────────

    /// Binds one stream to `size` components of `ty` at `offset` in `buffer`.
    ///
    /// # Panics
    /// Panics if the stream is already bound or holds gathered data from a draw;
    /// disable it first.
    #[track_caller]
    pub fn set_vertex_stream(
        &mut self,
        stream: usize,
        size: u16,
        ty: ElementType,
        stride: usize,
        buffer: Handle<VertexBuffer>,
        offset: usize,
    ) {
        self.assert_open();
        self.vertex_buffers.expect(buffer, "vertex buffer");
        let bytes = size as usize * ty.byte_size();
        self.stream_mut(stream).bind(stream, bytes, stride, StreamSource { buffer, offset });
    }

    /// Unbinds a stream and frees its gathered data.
    #[track_caller]
    pub fn disable_vertex_stream(&mut self, stream: usize) {
        self.assert_open();
        self.stream_mut(stream).unbind();
    }

    #[track_caller]
    pub fn vertex_stream(&self, stream: usize) -> &VertexStream {
        assert!(
            stream < MAX_VERTEX_STREAM_COUNT,
            "vertex stream {stream} out of range (max {MAX_VERTEX_STREAM_COUNT})"
        );
        &self.streams[stream]
    }

    #[track_caller]
    fn stream_mut(&mut self, stream: usize) -> &mut VertexStream {
        assert!(
            stream < MAX_VERTEX_STREAM_COUNT,
            "vertex stream {stream} out of range (max {MAX_VERTEX_STREAM_COUNT})"
        );
        &mut self.streams[stream]
    }

    // ── draws ─────────────────────────────────────────────────────────────

    /// Indexed draw reading `count` indices of `index_type` from caller memory.
    ///
    /// Every active stream ends up holding its attribute for each index, in draw
    /// order; see [`VertexStream::gathered`].
    #[track_caller]
    pub fn draw_elements(
        &mut self,
        primitive: PrimitiveType,
        count: usize,
        index_type: ElementType,
        indices: &[u8],
    ) {
        self.assert_open();
        let streams =
            draw::gather(&mut self.streams, &self.vertex_buffers, count, index_type, indices);
        log::trace!("draw_elements {primitive:?}: {count} indices over {streams} streams");
    }

    /// Indexed draw reading indices from an index buffer object.
    #[track_caller]
    pub fn draw_indexed(
        &mut self,
        primitive: PrimitiveType,
        count: usize,
        index_type: ElementType,
        index_buffer: Handle<IndexBuffer>,
    ) {
        self.assert_open();
        let indices = self.index_buffers.expect(index_buffer, "index buffer").data();
        let streams =
            draw::gather(&mut self.streams, &self.vertex_buffers, count, index_type, indices);
        log::trace!("draw_indexed {primitive:?}: {count} indices over {streams} streams");
    }

    /// Ranged indexed draw. No vertex fetch is emulated for this entry point.
    #[track_caller]
    pub fn draw_range_elements(
        &mut self,
        primitive: PrimitiveType,
        start: usize,
        count: usize,
        index_type: ElementType,
        index_buffer: Handle<IndexBuffer>,
    ) {
        self.assert_open();
        self.index_buffers.expect(index_buffer, "index buffer");
        log::trace!("draw_range_elements {primitive:?} {start}+{count} ({index_type:?}) ignored");
    }

    /// Non-indexed draw. No vertex fetch is emulated for this entry point.
    #[track_caller]
    pub fn draw(&mut self, primitive: PrimitiveType, first: usize, count: usize) {
        self.assert_open();
        log::trace!("draw {primitive:?} {first}+{count} ignored");
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::BufferUsage;
    use crate::device::{Device, DeviceInit};
    use crate::draw::PrimitiveType;
    use crate::handle::Handle;
    use crate::vertex::{ElementType, VertexDeclaration, VertexElement};

    /// Three interleaved vertices: position (3 x f32) then color (4 x u8).
    fn vertices() -> Vec<u8> {
        let mut out = Vec::new();
        for v in 0..3u8 {
            let base = f32::from(v);
            for c in [base, base + 0.25, base + 0.5] {
                out.extend_from_slice(&c.to_ne_bytes());
            }
            out.extend_from_slice(&[v * 10, v * 10 + 1, v * 10 + 2, 255]);
        }
        out
    }

    const STRIDE: usize = 16;

    fn setup() -> (Device, Handle<VertexDeclaration>, Vec<u8>) {
        let mut d = Device::open(DeviceInit::new(4, 4)).unwrap();
        let data = vertices();
        let vb = d.new_vertex_buffer(data.len(), Some(&data), BufferUsage::StaticDraw);
        let decl = d.new_vertex_declaration(&[
            VertexElement::new(0, 3, ElementType::Float),
            VertexElement::new(1, 4, ElementType::UnsignedByte),
        ]);
        d.enable_vertex_declaration(decl, vb);
        (d, decl, data)
    }

    fn u16_indices(indices: &[u16]) -> Vec<u8> {
        bytemuck::cast_slice(indices).to_vec()
    }

    fn position(src: &[u8], v: usize) -> &[u8] {
        &src[v * STRIDE..v * STRIDE + 12]
    }

    fn color(src: &[u8], v: usize) -> &[u8] {
        &src[v * STRIDE + 12..v * STRIDE + 16]
    }

    // ── binding ───────────────────────────────────────────────────────────

    #[test]
    fn enable_declaration_publishes_interleaved_streams() {
        let (d, _, _) = setup();

        let pos = d.vertex_stream(0);
        assert_eq!(pos.size(), 12);
        assert_eq!(pos.stride(), STRIDE);
        assert_eq!(pos.source().unwrap().offset, 0);

        let col = d.vertex_stream(1);
        assert_eq!(col.size(), 4);
        assert_eq!(col.stride(), STRIDE);
        assert_eq!(col.source().unwrap().offset, 12);

        assert!(!d.vertex_stream(2).is_active());
    }

    #[test]
    fn disable_declaration_clears_its_streams() {
        let (mut d, decl, _) = setup();
        d.disable_vertex_declaration(decl);
        assert!(!d.vertex_stream(0).is_active());
        assert!(d.vertex_stream(1).source().is_none());
    }

    #[test]
    #[should_panic(expected = "vertex stream 0 is already bound")]
    fn enabling_twice_without_disable_is_fatal() {
        let (mut d, decl, data) = setup();
        let other = d.new_vertex_buffer(data.len(), Some(&data), BufferUsage::StaticDraw);
        d.enable_vertex_declaration(decl, other);
    }

    #[test]
    #[should_panic(expected = "vertex stream 5 is already bound")]
    fn set_vertex_stream_twice_is_fatal() {
        let mut d = Device::open(DeviceInit::new(1, 1)).unwrap();
        let vb = d.new_vertex_buffer(16, None, BufferUsage::StaticDraw);
        d.set_vertex_stream(5, 2, ElementType::Float, 8, vb, 0);
        d.set_vertex_stream(5, 2, ElementType::Float, 8, vb, 0);
    }

    #[test]
    fn set_vertex_stream_after_disable_rebinds() {
        let mut d = Device::open(DeviceInit::new(1, 1)).unwrap();
        let vb = d.new_vertex_buffer(16, None, BufferUsage::StaticDraw);
        d.set_vertex_stream(5, 2, ElementType::Short, 4, vb, 0);
        assert_eq!(d.vertex_stream(5).size(), 4);
        d.disable_vertex_stream(5);
        d.set_vertex_stream(5, 1, ElementType::Int, 4, vb, 8);
        assert_eq!(d.vertex_stream(5).size(), 4);
        assert_eq!(d.vertex_stream(5).source().unwrap().offset, 8);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn stream_past_capacity_is_fatal() {
        let d = Device::open(DeviceInit::new(1, 1)).unwrap();
        d.vertex_stream(32);
    }

    #[test]
    #[should_panic(expected = "stale or invalid vertex declaration handle")]
    fn deleted_declaration_cannot_be_enabled() {
        let mut d = Device::open(DeviceInit::new(1, 1)).unwrap();
        let vb = d.new_vertex_buffer(4, None, BufferUsage::StaticDraw);
        let decl = d.new_vertex_declaration(&[VertexElement::new(0, 1, ElementType::Float)]);
        d.delete_vertex_declaration(decl);
        d.enable_vertex_declaration(decl, vb);
    }

    // ── gather ────────────────────────────────────────────────────────────

    #[test]
    fn identity_indices_reproduce_source_order() {
        let (mut d, _, src) = setup();
        let indices = u16_indices(&[0, 1, 2]);
        d.draw_elements(PrimitiveType::Triangles, 3, ElementType::UnsignedShort, &indices);

        let pos = d.vertex_stream(0).gathered().unwrap();
        let col = d.vertex_stream(1).gathered().unwrap();
        assert_eq!(pos.len(), 12 * 3);
        assert_eq!(col.len(), 4 * 3);
        for v in 0..3 {
            assert_eq!(&pos[v * 12..v * 12 + 12], position(&src, v));
            assert_eq!(&col[v * 4..v * 4 + 4], color(&src, v));
        }
    }

    #[test]
    fn permuted_indices_permute_gathered_data() {
        let (mut d, _, src) = setup();
        let order = [2usize, 0, 1];
        let indices = u16_indices(&[2, 0, 1]);
        d.draw_elements(PrimitiveType::Triangles, 3, ElementType::UnsignedShort, &indices);

        let pos = d.vertex_stream(0).gathered().unwrap();
        let col = d.vertex_stream(1).gathered().unwrap();
        for (i, &v) in order.iter().enumerate() {
            assert_eq!(&pos[i * 12..i * 12 + 12], position(&src, v));
            assert_eq!(&col[i * 4..i * 4 + 4], color(&src, v));
        }
    }

    #[test]
    fn repeated_indices_duplicate_vertices() {
        let (mut d, _, src) = setup();
        d.draw_elements(PrimitiveType::Triangles, 4, ElementType::UnsignedByte, &[1, 1, 0, 1]);
        let col = d.vertex_stream(1).gathered().unwrap();
        assert_eq!(col.len(), 16);
        assert_eq!(&col[0..4], color(&src, 1));
        assert_eq!(&col[4..8], color(&src, 1));
        assert_eq!(&col[8..12], color(&src, 0));
    }

    #[test]
    fn float_indices_truncate_toward_zero() {
        let (mut d, _, src) = setup();
        let indices: Vec<u8> = bytemuck::cast_slice(&[2.0f32, 1.75, -3.0]).to_vec();
        d.draw_elements(PrimitiveType::Triangles, 3, ElementType::Float, &indices);

        let col = d.vertex_stream(1).gathered().unwrap();
        assert_eq!(&col[0..4], color(&src, 2));
        assert_eq!(&col[4..8], color(&src, 1));
        // Negative values saturate to vertex 0.
        assert_eq!(&col[8..12], color(&src, 0));
    }

    #[test]
    fn draw_indexed_reads_index_buffer() {
        let (mut d, _, src) = setup();
        let indices: Vec<u8> = bytemuck::cast_slice(&[1u32, 2]).to_vec();
        let ib = d.new_index_buffer(indices.len(), Some(&indices), BufferUsage::StaticDraw);

        d.draw_indexed(PrimitiveType::Lines, 2, ElementType::UnsignedInt, ib);
        let pos = d.vertex_stream(0).gathered().unwrap();
        assert_eq!(&pos[0..12], position(&src, 1));
        assert_eq!(&pos[12..24], position(&src, 2));
    }

    #[test]
    fn disabling_frees_gathered_data_and_allows_rebind() {
        let (mut d, decl, _) = setup();
        d.draw_elements(PrimitiveType::Points, 1, ElementType::UnsignedByte, &[0]);
        assert!(d.vertex_stream(0).gathered().is_some());

        d.disable_vertex_declaration(decl);
        assert!(d.vertex_stream(0).gathered().is_none());

        let vb = d.new_vertex_buffer(STRIDE, None, BufferUsage::StaticDraw);
        d.enable_vertex_declaration(decl, vb);
        assert!(d.vertex_stream(0).is_active());
    }

    #[test]
    fn stub_draws_have_no_gather_side_effect() {
        let (mut d, _, _) = setup();
        let ib = d.new_index_buffer(2, Some(&[0, 0]), BufferUsage::StaticDraw);
        d.draw(PrimitiveType::Triangles, 0, 3);
        d.draw_range_elements(PrimitiveType::Triangles, 0, 2, ElementType::UnsignedByte, ib);
        assert!(d.vertex_stream(0).gathered().is_none());
    }

    #[test]
    #[should_panic(expected = "needs 6 bytes")]
    fn short_index_data_is_fatal() {
        let (mut d, _, _) = setup();
        d.draw_elements(PrimitiveType::Triangles, 3, ElementType::UnsignedShort, &[0, 0, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "reads bytes")]
    fn index_past_vertex_data_is_fatal() {
        let (mut d, _, _) = setup();
        d.draw_elements(PrimitiveType::Points, 1, ElementType::UnsignedByte, &[3]);
    }

    #[test]
    #[should_panic(expected = "stale or invalid vertex buffer handle")]
    fn draw_after_source_deleted_is_fatal() {
        let mut d = Device::open(DeviceInit::new(1, 1)).unwrap();
        let vb = d.new_vertex_buffer(4, None, BufferUsage::StaticDraw);
        d.set_vertex_stream(0, 1, ElementType::Float, 4, vb, 0);
        d.delete_vertex_buffer(vb);
        d.draw_elements(PrimitiveType::Points, 1, ElementType::UnsignedByte, &[0]);
    }
}
