use core::ops::{Deref, DerefMut};

/// Update-frequency hint supplied at creation and on full uploads.
///
/// Recorded only; the software device stores every buffer the same way.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum BufferUsage {
    StreamDraw,
    #[default]
    StaticDraw,
    DynamicDraw,
}

/// Intended access for a map. Recorded only; unmap always writes back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BufferAccess {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

/// Byte storage shared by vertex and index buffers.
///
/// Invariant: `snapshot` is `Some` exactly between a [`map`](Self::map) and its
/// matching [`unmap`](Self::unmap).
#[derive(Debug)]
pub struct BufferStorage {
    data: Vec<u8>,
    snapshot: Option<Snapshot>,
    usage: BufferUsage,
}

#[derive(Debug)]
struct Snapshot {
    bytes: Vec<u8>,
    access: BufferAccess,
}

impl BufferStorage {
    /// Allocates `size` zeroed bytes and copies `data` (if any) to the front.
    #[track_caller]
    pub fn new(size: usize, data: Option<&[u8]>, usage: BufferUsage) -> Self {
        let mut storage = Self { data: vec![0; size], snapshot: None, usage };
        if let Some(data) = data {
            storage.write(0, data);
        }
        storage
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn usage(&self) -> BufferUsage {
        self.usage
    }

    #[inline]
    pub fn is_mapped(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Access mode of the outstanding map, if any.
    #[inline]
    pub fn mapped_access(&self) -> Option<BufferAccess> {
        self.snapshot.as_ref().map(|s| s.access)
    }

    /// Replaces the buffer contents from the start. The buffer keeps its size.
    #[track_caller]
    pub fn set_data(&mut self, data: &[u8], usage: BufferUsage) {
        self.usage = usage;
        self.write(0, data);
    }

    /// Copies `data` to `offset`; bytes outside `[offset, offset + data.len())` are untouched.
    #[track_caller]
    pub fn set_sub_data(&mut self, offset: usize, data: &[u8]) {
        self.write(offset, data);
    }

    /// Takes a snapshot of the contents and hands it out for mutation.
    ///
    /// # Panics
    /// Panics if a map is already outstanding.
    #[track_caller]
    pub fn map(&mut self, access: BufferAccess) -> &mut [u8] {
        assert!(self.snapshot.is_none(), "buffer is already mapped");
        let snapshot = self.snapshot.insert(Snapshot { bytes: self.data.clone(), access });
        &mut snapshot.bytes
    }

    /// The outstanding snapshot, if mapped.
    #[inline]
    pub fn mapped_mut(&mut self) -> Option<&mut [u8]> {
        self.snapshot.as_mut().map(|s| s.bytes.as_mut_slice())
    }

    /// Writes the snapshot back and releases it.
    ///
    /// # Panics
    /// Panics if the buffer is not mapped.
    #[track_caller]
    pub fn unmap(&mut self) -> bool {
        let Some(snapshot) = self.snapshot.take() else {
            panic!("unmap of a buffer that is not mapped");
        };
        self.data.copy_from_slice(&snapshot.bytes);
        true
    }

    #[track_caller]
    fn write(&mut self, offset: usize, data: &[u8]) {
        let end = offset
            .checked_add(data.len())
            .filter(|&end| end <= self.data.len())
            .unwrap_or_else(|| {
                panic!(
                    "buffer write of {} bytes at offset {offset} exceeds buffer size {}",
                    data.len(),
                    self.data.len()
                )
            });
        self.data[offset..end].copy_from_slice(data);
    }
}

/// Vertex data buffer.
#[derive(Debug)]
pub struct VertexBuffer(BufferStorage);

/// Index data buffer.
#[derive(Debug)]
pub struct IndexBuffer(BufferStorage);

macro_rules! buffer_kind {
    ($name:ident) => {
        impl $name {
            #[track_caller]
            pub fn new(size: usize, data: Option<&[u8]>, usage: BufferUsage) -> Self {
                Self(BufferStorage::new(size, data, usage))
            }
        }

        impl Deref for $name {
            type Target = BufferStorage;
            #[inline]
            fn deref(&self) -> &BufferStorage {
                &self.0
            }
        }

        impl DerefMut for $name {
            #[inline]
            fn deref_mut(&mut self) -> &mut BufferStorage {
                &mut self.0
            }
        }
    };
}

buffer_kind!(VertexBuffer);
buffer_kind!(IndexBuffer);
