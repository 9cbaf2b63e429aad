/// Pixel dimensions of a framebuffer or texture.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `width * height`, as an allocation length.
    #[inline]
    pub const fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}
