use super::ElementType;

/// Number of vertex stream slots on the device.
///
/// A declaration is a fixed table with one entry per slot and the device keeps
/// one [`VertexStream`](super::VertexStream) per slot.
pub const MAX_VERTEX_STREAM_COUNT: usize = 32;

/// One attribute of a vertex format, as supplied by the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexElement {
    /// Target stream slot (`0..MAX_VERTEX_STREAM_COUNT`).
    pub stream: u16,
    /// Number of components (e.g. 3 for a position).
    pub size: u16,
    pub ty: ElementType,
}

impl VertexElement {
    #[inline]
    pub const fn new(stream: u16, size: u16, ty: ElementType) -> Self {
        Self { stream, size, ty }
    }

    /// Bytes taken by this element inside one vertex.
    #[inline]
    pub const fn byte_size(self) -> usize {
        self.size as usize * self.ty.byte_size()
    }
}

/// Where one element of a declaration sits inside an interleaved vertex.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ElementLayout {
    pub element: VertexElement,
    /// Byte offset from the start of the vertex.
    pub offset: usize,
}

/// Compiled vertex format: one optional element per stream slot.
///
/// Elements are packed back-to-back in ascending slot order and share a single
/// stride, i.e. a declaration always describes one interleaved vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexDeclaration {
    slots: [Option<VertexElement>; MAX_VERTEX_STREAM_COUNT],
}

impl VertexDeclaration {
    /// Builds the slot table from a sparse element list.
    ///
    /// # Panics
    /// Panics if an element targets a stream that already holds a non-empty
    /// element, or a stream id is out of range. A zero-component element may be
    /// replaced.
    #[track_caller]
    pub fn new(elements: &[VertexElement]) -> Self {
        let mut slots = [None; MAX_VERTEX_STREAM_COUNT];

        for element in elements {
            let stream = element.stream as usize;
            assert!(
                stream < MAX_VERTEX_STREAM_COUNT,
                "vertex element stream {stream} out of range (max {MAX_VERTEX_STREAM_COUNT})"
            );
            assert!(
                !slots[stream].is_some_and(|e: VertexElement| e.size > 0),
                "vertex declaration assigns stream {stream} twice"
            );
            slots[stream] = Some(*element);
        }

        Self { slots }
    }

    /// Element assigned to `stream`, if any.
    #[inline]
    pub fn element(&self, stream: usize) -> Option<VertexElement> {
        self.slots.get(stream).copied().flatten()
    }

    /// Occupied slots in ascending stream order.
    pub fn elements(&self) -> impl Iterator<Item = VertexElement> + '_ {
        self.slots.iter().filter_map(|s| *s)
    }

    /// Total bytes per vertex: the sum of every element's byte size.
    pub fn stride(&self) -> usize {
        self.elements().map(VertexElement::byte_size).sum()
    }

    /// Element offsets within the interleaved vertex.
    ///
    /// Zero-sized elements are skipped; they never produce a stream binding.
    pub fn layout(&self) -> impl Iterator<Item = ElementLayout> + '_ {
        let mut offset = 0;
        self.elements().filter(|e| e.size > 0).map(move |element| {
            let at = offset;
            offset += element.byte_size();
            ElementLayout { element, offset: at }
        })
    }
}
