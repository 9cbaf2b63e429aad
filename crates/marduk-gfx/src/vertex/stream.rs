use crate::buffer::VertexBuffer;
use crate::handle::Handle;

/// Non-owning reference to the first byte of an attribute inside a vertex buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StreamSource {
    pub buffer: Handle<VertexBuffer>,
    /// Byte offset of the attribute within the buffer.
    pub offset: usize,
}

/// One device stream slot.
///
/// A stream is either disabled (no source, zero size) or bound to a source.
/// After an indexed draw it also owns the gathered attribute data for that draw
/// until it is disabled.
#[derive(Debug, Default)]
pub struct VertexStream {
    source: Option<StreamSource>,
    size: usize,
    stride: usize,
    gathered: Option<Vec<u8>>,
}

impl VertexStream {
    #[inline]
    pub fn source(&self) -> Option<StreamSource> {
        self.source
    }

    /// Bytes per vertex for this attribute (`components * type size`). Zero when disabled.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// A stream takes part in draws when it has a non-zero element size.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.size > 0
    }

    /// Attribute data compacted into draw order by the last indexed draw.
    #[inline]
    pub fn gathered(&self) -> Option<&[u8]> {
        self.gathered.as_deref()
    }

    #[track_caller]
    pub(crate) fn bind(&mut self, id: usize, size: usize, stride: usize, source: StreamSource) {
        assert!(
            self.source.is_none() && self.gathered.is_none(),
            "vertex stream {id} is already bound; disable it before rebinding"
        );
        self.source = Some(source);
        self.size = size;
        self.stride = stride;
    }

    pub(crate) fn unbind(&mut self) {
        self.size = 0;
        self.gathered = None;
        self.source = None;
    }

    pub(crate) fn set_gathered(&mut self, data: Vec<u8>) {
        self.gathered = Some(data);
    }
}
