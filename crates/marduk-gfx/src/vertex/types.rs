/// Scalar type of a vertex element component or of an index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ElementType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Float,
}

impl ElementType {
    /// Size in bytes of one component of this type.
    #[inline]
    pub const fn byte_size(self) -> usize {
        match self {
            ElementType::Byte | ElementType::UnsignedByte => 1,
            ElementType::Short | ElementType::UnsignedShort => 2,
            ElementType::Int | ElementType::UnsignedInt | ElementType::Float => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_sizes_match_native_widths() {
        assert_eq!(ElementType::Byte.byte_size(), 1);
        assert_eq!(ElementType::UnsignedByte.byte_size(), 1);
        assert_eq!(ElementType::Short.byte_size(), 2);
        assert_eq!(ElementType::UnsignedShort.byte_size(), 2);
        assert_eq!(ElementType::Int.byte_size(), 4);
        assert_eq!(ElementType::UnsignedInt.byte_size(), 4);
        assert_eq!(ElementType::Float.byte_size(), 4);
    }
}
