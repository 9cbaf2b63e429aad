use crate::coords::Extent;
use crate::handle::Handle;
use crate::texture::{Texture, TextureFormat};

use super::FrameBuffer;

/// Offscreen destination: a color-attachment texture plus private planes.
///
/// The texture lives in the device's texture arena; the target owns it and
/// deletes it together with its planes.
#[derive(Debug)]
pub struct RenderTarget {
    texture: Handle<Texture>,
    format: TextureFormat,
    framebuffer: FrameBuffer,
}

impl RenderTarget {
    #[inline]
    pub(crate) fn new(texture: Handle<Texture>, format: TextureFormat, extent: Extent) -> Self {
        Self { texture, format, framebuffer: FrameBuffer::new(extent) }
    }

    /// Color-attachment texture.
    #[inline]
    pub fn texture(&self) -> Handle<Texture> {
        self.texture
    }

    #[inline]
    pub fn format(&self) -> TextureFormat {
        self.format
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.framebuffer.extent()
    }

    #[inline]
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    #[inline]
    pub(crate) fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.framebuffer
    }
}

/// Which plane set clears and draws currently land in.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ActiveTarget {
    #[default]
    Default,
    RenderTarget(Handle<RenderTarget>),
}
