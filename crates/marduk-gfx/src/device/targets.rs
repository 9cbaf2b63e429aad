use crate::coords::Extent;
use crate::handle::Handle;
use crate::target::{ActiveTarget, RenderTarget};
use crate::texture::{Texture, TextureFormat};

use super::Device;

const TEXTURE: &str = "texture";
const RENDER_TARGET: &str = "render target";

impl Device {
    // ── textures ──────────────────────────────────────────────────────────

    /// Creates a texture with no storage.
    pub fn new_texture(&mut self) -> Handle<Texture> {
        self.textures.insert(Texture::new())
    }

    /// # Panics
    /// Panics if the texture is a render target's color attachment; delete the
    /// render target instead.
    #[track_caller]
    pub fn delete_texture(&mut self, texture: Handle<Texture>) {
        self.textures.expect(texture, TEXTURE);
        let owner = self.render_targets.iter().find(|(_, rt)| rt.texture() == texture);
        if let Some((rt, _)) = owner {
            panic!("texture {texture:?} is owned by render target {rt:?}");
        }
        self.textures.remove(texture);
    }

    #[track_caller]
    pub fn texture(&self, texture: Handle<Texture>) -> &Texture {
        self.textures.expect(texture, TEXTURE)
    }

    /// Reallocates the texture storage for `width x height` texels of `format`
    /// and copies `data` into it.
    #[track_caller]
    pub fn set_texture_data(
        &mut self,
        texture: Handle<Texture>,
        mip_map: u16,
        width: u32,
        height: u32,
        format: TextureFormat,
        data: &[u8],
    ) {
        self.textures
            .expect_mut(texture, TEXTURE)
            .set_data(mip_map, width, height, format, data);
    }

    /// Binds a texture for sampling. Validated, otherwise ignored.
    #[track_caller]
    pub fn set_texture(&mut self, texture: Handle<Texture>) {
        self.assert_open();
        self.textures.expect(texture, TEXTURE);
    }

    // ── render targets ────────────────────────────────────────────────────

    /// Creates an offscreen target: a `format` texture plus private planes, all
    /// sized `width x height`.
    pub fn new_render_target(
        &mut self,
        width: u32,
        height: u32,
        format: TextureFormat,
    ) -> Handle<RenderTarget> {
        let texture = self.new_texture();
        self.set_texture_data(texture, 0, width, height, format, &[]);

        let rt = self
            .render_targets
            .insert(RenderTarget::new(texture, format, Extent::new(width, height)));
        log::debug!("render target {rt:?} created ({width}x{height} {format:?})");
        rt
    }

    /// Deletes the target, its texture and its planes.
    ///
    /// Deleting the active target points the device back at the default planes.
    #[track_caller]
    pub fn delete_render_target(&mut self, render_target: Handle<RenderTarget>) {
        let texture = self.render_targets.expect(render_target, RENDER_TARGET).texture();
        self.textures.expect(texture, TEXTURE);

        self.render_targets.remove(render_target);
        self.textures.remove(texture);

        if self.active_target == ActiveTarget::RenderTarget(render_target) {
            log::warn!(
                "active render target {render_target:?} deleted; reverting to default framebuffer"
            );
            self.active_target = ActiveTarget::Default;
        }
        log::debug!("render target {render_target:?} deleted");
    }

    #[track_caller]
    pub fn render_target(&self, render_target: Handle<RenderTarget>) -> &RenderTarget {
        self.render_targets.expect(render_target, RENDER_TARGET)
    }

    /// Color-attachment texture of a target.
    #[track_caller]
    pub fn get_render_target_texture(
        &self,
        render_target: Handle<RenderTarget>,
    ) -> Handle<Texture> {
        self.render_target(render_target).texture()
    }

    /// Redirects clears to the target's planes. Re-enabling the active target is a no-op.
    #[track_caller]
    pub fn enable_render_target(&mut self, render_target: Handle<RenderTarget>) {
        self.assert_open();
        self.render_targets.expect(render_target, RENDER_TARGET);
        self.active_target = ActiveTarget::RenderTarget(render_target);
    }

    /// Returns to the default planes, whichever target was active.
    #[track_caller]
    pub fn disable_render_target(&mut self, render_target: Handle<RenderTarget>) {
        self.assert_open();
        self.render_targets.expect(render_target, RENDER_TARGET);
        self.active_target = ActiveTarget::Default;
    }
}
