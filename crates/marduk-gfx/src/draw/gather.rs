use crate::buffer::VertexBuffer;
use crate::handle::Arena;
use crate::vertex::{ElementType, VertexStream};

use super::decode_index;

/// Vertex fetch: copies every active stream's attribute for each index into a
/// per-stream buffer laid out in draw order (`gathered[i * size..][..size]` is
/// the attribute of the `i`-th drawn vertex).
///
/// Returns the number of streams that took part.
///
/// # Panics
/// Panics if the index data is shorter than `count` indices, if a stream's
/// source buffer is stale, or if an index reads past the end of its source.
#[track_caller]
pub(crate) fn gather(
    streams: &mut [VertexStream],
    vertex_buffers: &Arena<VertexBuffer>,
    count: usize,
    index_type: ElementType,
    indices: &[u8],
) -> usize {
    let needed = count * index_type.byte_size();
    assert!(
        indices.len() >= needed,
        "draw of {count} {index_type:?} indices needs {needed} bytes, index data has {}",
        indices.len()
    );

    let order: Vec<u32> = (0..count).map(|i| decode_index(index_type, indices, i)).collect();

    let mut active = 0;
    for (id, stream) in streams.iter_mut().enumerate() {
        if !stream.is_active() {
            continue;
        }
        let Some(source) = stream.source() else {
            continue;
        };

        let data = vertex_buffers.expect(source.buffer, "vertex buffer").data();
        let size = stream.size();
        let stride = stream.stride();

        let mut gathered = vec![0u8; size * count];
        for (dst, &index) in gathered.chunks_exact_mut(size).zip(&order) {
            let at = source.offset + index as usize * stride;
            let Some(src) = data.get(at..at + size) else {
                panic!(
                    "stream {id}: vertex {index} reads bytes {at}..{} of a {}-byte vertex buffer",
                    at + size,
                    data.len()
                );
            };
            dst.copy_from_slice(src);
        }

        stream.set_gathered(gathered);
        active += 1;
    }
    active
}
