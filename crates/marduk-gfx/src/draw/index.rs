use bytemuck::pod_read_unaligned;

use crate::vertex::ElementType;

/// Reads the `i`-th index of `indices`, laid out as `ty`, as an unsigned index.
///
/// Integer types are reinterpreted at their own width and zero-extended, so a
/// signed byte `0xff` decodes to 255 rather than `u32::MAX`. Float indices are
/// truncated toward zero; negative and NaN values saturate to 0.
///
/// # Panics
/// Panics if `indices` does not hold an `i`-th element.
#[track_caller]
pub fn decode_index(ty: ElementType, indices: &[u8], i: usize) -> u32 {
    let width = ty.byte_size();
    let at = i * width;
    let Some(bytes) = indices.get(at..at + width) else {
        panic!("index {i} lies outside {} bytes of {ty:?} index data", indices.len());
    };

    match ty {
        ElementType::Byte | ElementType::UnsignedByte => u32::from(bytes[0]),
        ElementType::Short | ElementType::UnsignedShort => {
            u32::from(pod_read_unaligned::<u16>(bytes))
        }
        ElementType::Int | ElementType::UnsignedInt => pod_read_unaligned::<u32>(bytes),
        ElementType::Float => pod_read_unaligned::<f32>(bytes) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes_of<T: bytemuck::Pod>(values: &[T]) -> Vec<u8> {
        bytemuck::cast_slice(values).to_vec()
    }

    #[test]
    fn unsigned_widths() {
        assert_eq!(decode_index(ElementType::UnsignedByte, &[3, 200], 1), 200);
        assert_eq!(decode_index(ElementType::UnsignedShort, &bytes_of(&[7u16, 65535]), 1), 65535);
        assert_eq!(decode_index(ElementType::UnsignedInt, &bytes_of(&[1u32, 70000]), 1), 70000);
    }

    #[test]
    fn signed_types_zero_extend() {
        assert_eq!(decode_index(ElementType::Byte, &bytes_of(&[-1i8]), 0), 0xff);
        assert_eq!(decode_index(ElementType::Short, &bytes_of(&[-1i16]), 0), 0xffff);
        assert_eq!(decode_index(ElementType::Int, &bytes_of(&[-1i32]), 0), u32::MAX);
        assert_eq!(decode_index(ElementType::Short, &bytes_of(&[12i16]), 0), 12);
    }

    #[test]
    fn float_indices_truncate() {
        let data = bytes_of(&[2.0f32, 3.9, -1.0]);
        assert_eq!(decode_index(ElementType::Float, &data, 0), 2);
        assert_eq!(decode_index(ElementType::Float, &data, 1), 3);
        assert_eq!(decode_index(ElementType::Float, &data, 2), 0);
    }

    #[test]
    fn reads_unaligned_data() {
        // Index data starting at an odd address.
        let data = [0u8, 5, 0, 6, 0];
        let expected = u32::from(u16::from_ne_bytes([6, 0]));
        assert_eq!(decode_index(ElementType::UnsignedShort, &data[1..], 1), expected);
    }

    #[test]
    #[should_panic(expected = "outside 4 bytes")]
    fn short_index_data_is_fatal() {
        decode_index(ElementType::UnsignedShort, &[0; 4], 2);
    }
}
