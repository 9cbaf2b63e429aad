use crate::coords::{ColorRgba8, Extent};

/// Bytes per pixel in every plane.
pub const PLANE_BYTES_PER_PIXEL: usize = 4;

/// One of the four per-target planes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Plane {
    Color,
    Depth,
    Accum,
    Stencil,
}

/// Four-plane software framebuffer.
///
/// Every plane holds one 32-bit word per pixel:
/// - color: packed `0xRRGGBBAA`
/// - depth: `f32`
/// - accum: allocated only, never written by clears
/// - stencil: `u32`
#[derive(Debug, Clone, Default)]
pub struct FrameBuffer {
    extent: Extent,
    color: Vec<u32>,
    depth: Vec<f32>,
    accum: Vec<u32>,
    stencil: Vec<u32>,
}

impl FrameBuffer {
    /// Allocates zeroed planes for `extent`.
    pub fn new(extent: Extent) -> Self {
        let n = extent.pixel_count();
        Self {
            extent,
            color: vec![0; n],
            depth: vec![0.0; n],
            accum: vec![0; n],
            stencil: vec![0; n],
        }
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Size of `plane` in bytes (`4 * width * height`).
    #[inline]
    pub fn plane_size(&self, plane: Plane) -> usize {
        self.plane_bytes(plane).len()
    }

    /// Raw bytes of `plane`, in native word order.
    pub fn plane_bytes(&self, plane: Plane) -> &[u8] {
        match plane {
            Plane::Color => bytemuck::cast_slice(&self.color),
            Plane::Depth => bytemuck::cast_slice(&self.depth),
            Plane::Accum => bytemuck::cast_slice(&self.accum),
            Plane::Stencil => bytemuck::cast_slice(&self.stencil),
        }
    }

    #[inline]
    pub fn color(&self) -> &[u32] {
        &self.color
    }

    #[inline]
    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    #[inline]
    pub fn stencil(&self) -> &[u32] {
        &self.stencil
    }

    pub(crate) fn fill_color(&mut self, color: ColorRgba8) {
        self.color.fill(color.to_rgba_u32());
    }

    pub(crate) fn fill_depth(&mut self, depth: f32) {
        self.depth.fill(depth);
    }

    pub(crate) fn fill_stencil(&mut self, stencil: u32) {
        self.stencil.fill(stencil);
    }
}
