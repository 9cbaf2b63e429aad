//! Fixed-function state.
//!
//! The software device tracks only the write masks; render states, blend
//! functions and cull faces are accepted and ignored. Calling code can toggle
//! them freely without affecting device behavior.

use bitflags::bitflags;

bitflags! {
    /// Planes affected by a clear.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        const COLOR   = 1 << 0;
        const DEPTH   = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

/// Toggleable pipeline state. Accepted and ignored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RenderState {
    DepthTest,
    AlphaTest,
    Blend,
    CullFace,
    PolygonOffsetFill,
}

/// Blend equation factor. Accepted and ignored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    SrcAlphaSaturate,
}

/// Faces removed by culling. Accepted and ignored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FaceType {
    Front,
    Back,
    FrontAndBack,
}

/// Per-channel color write mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ColorMask {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    pub alpha: bool,
}

impl ColorMask {
    pub const ALL: Self = Self { red: true, green: true, blue: true, alpha: true };
}

/// Write masks recorded by the device. Clears do not consult them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WriteMasks {
    pub color: ColorMask,
    pub depth: bool,
    pub index: u32,
    pub stencil: u32,
}

impl Default for WriteMasks {
    fn default() -> Self {
        Self { color: ColorMask::ALL, depth: true, index: !0, stencil: !0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_flags_combine() {
        let flags = ClearFlags::COLOR | ClearFlags::STENCIL;
        assert!(flags.contains(ClearFlags::COLOR));
        assert!(!flags.contains(ClearFlags::DEPTH));
        assert_eq!(ClearFlags::all().bits(), 0b111);
    }

    #[test]
    fn masks_default_to_write_everything() {
        let m = WriteMasks::default();
        assert_eq!(m.color, ColorMask::ALL);
        assert!(m.depth);
        assert_eq!(m.stencil, u32::MAX);
    }
}
