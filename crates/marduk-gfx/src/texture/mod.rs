//! Texture storage.
//!
//! Textures hold raw texel bytes only; compressed formats are stored as opaque
//! payloads sized by their nominal bytes-per-texel.

use crate::coords::Extent;

/// Texel layout of a texture payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    Luminance,
    Rgb,
    Rgba,
    RgbDxt1,
    RgbaDxt1,
    RgbaDxt3,
    RgbaDxt5,
}

impl TextureFormat {
    /// Bytes reserved per texel when sizing storage.
    #[inline]
    pub const fn texel_size(self) -> usize {
        match self {
            TextureFormat::Luminance => 1,
            TextureFormat::Rgb | TextureFormat::RgbDxt1 => 3,
            TextureFormat::Rgba
            | TextureFormat::RgbaDxt1
            | TextureFormat::RgbaDxt3
            | TextureFormat::RgbaDxt5 => 4,
        }
    }
}

/// A texture object. Storage is absent until the first upload.
#[derive(Debug, Default)]
pub struct Texture {
    data: Option<Vec<u8>>,
    format: Option<TextureFormat>,
    extent: Extent,
}

impl Texture {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    #[inline]
    pub fn format(&self) -> Option<TextureFormat> {
        self.format
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.extent.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.extent.height
    }

    /// Replaces the storage with `texel_size(format) * width * height` bytes and
    /// copies `data` to the front of it.
    ///
    /// The mip level is accepted but only level 0 storage is kept.
    ///
    /// # Panics
    /// Panics if `data` is larger than the new storage.
    #[track_caller]
    pub fn set_data(
        &mut self,
        mip_map: u16,
        width: u32,
        height: u32,
        format: TextureFormat,
        data: &[u8],
    ) {
        let extent = Extent::new(width, height);
        let size = format.texel_size() * extent.pixel_count();
        assert!(
            data.len() <= size,
            "texture payload of {} bytes exceeds {size}-byte storage ({width}x{height} {format:?})",
            data.len()
        );
        if mip_map != 0 {
            log::trace!("texture upload for mip {mip_map} replaces level 0 storage");
        }

        let mut storage = vec![0; size];
        storage[..data.len()].copy_from_slice(data);

        self.data = Some(storage);
        self.format = Some(format);
        self.extent = extent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_texture_has_no_storage() {
        let t = Texture::new();
        assert!(t.data().is_none());
        assert!(t.format().is_none());
        assert_eq!((t.width(), t.height()), (0, 0));
    }

    #[test]
    fn set_data_sizes_storage_by_format() {
        let mut t = Texture::new();
        t.set_data(0, 4, 2, TextureFormat::Rgb, &[]);
        assert_eq!(t.data().map(<[u8]>::len), Some(3 * 4 * 2));
        assert_eq!(t.format(), Some(TextureFormat::Rgb));
        assert_eq!((t.width(), t.height()), (4, 2));
    }

    #[test]
    fn set_data_copies_payload_and_reallocates() {
        let mut t = Texture::new();
        t.set_data(0, 1, 1, TextureFormat::Rgba, &[1, 2, 3, 4]);
        assert_eq!(t.data(), Some(&[1u8, 2, 3, 4][..]));

        t.set_data(0, 2, 1, TextureFormat::Luminance, &[9, 8]);
        assert_eq!(t.data(), Some(&[9u8, 8][..]));
    }

    #[test]
    #[should_panic(expected = "payload of 2 bytes exceeds 1-byte storage")]
    fn oversized_payload_is_fatal() {
        Texture::new().set_data(0, 1, 1, TextureFormat::Luminance, &[0, 0]);
    }

    #[test]
    fn compressed_formats_use_nominal_texel_size() {
        assert_eq!(TextureFormat::RgbDxt1.texel_size(), 3);
        assert_eq!(TextureFormat::RgbaDxt5.texel_size(), 4);
    }
}
