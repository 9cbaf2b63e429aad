/// 8-bit straight-alpha RGBA color, as accepted by framebuffer clears.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ColorRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorRgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Packs the color into one pixel word: `(r << 24) | (g << 16) | (b << 8) | a`.
    #[inline]
    pub const fn to_rgba_u32(self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | self.a as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_red_in_high_byte() {
        assert_eq!(ColorRgba8::new(10, 20, 30, 255).to_rgba_u32(), 0x0A14_1EFF);
        assert_eq!(ColorRgba8::new(0xff, 0, 0, 0).to_rgba_u32(), 0xff00_0000);
    }
}
