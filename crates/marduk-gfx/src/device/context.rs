use anyhow::{Context, Result};

use crate::buffer::{IndexBuffer, VertexBuffer};
use crate::coords::{ColorRgba8, Extent};
use crate::handle::{Arena, Handle};
use crate::program::{ConstantBank, FragmentProgram, VertexProgram};
use crate::state::{BlendFactor, ClearFlags, ColorMask, FaceType, RenderState, WriteMasks};
use crate::target::{ActiveTarget, FrameBuffer, PLANE_BYTES_PER_PIXEL, RenderTarget};
use crate::texture::Texture;
use crate::vertex::{MAX_VERTEX_STREAM_COUNT, VertexDeclaration, VertexStream};

use super::{DeviceInit, WindowParam};

/// Software graphics device.
///
/// Owns everything the null backend tracks:
/// - the default framebuffer and which plane set is active
/// - the vertex stream slots and both constant banks
/// - an arena per resource kind, addressed through [`Handle`]s
///
/// The device is single-threaded and fully synchronous. Programming errors
/// (stale handles, double map, rebinding a bound stream, calls on a closed
/// device, ...) panic; nothing is reported as a recoverable error once the
/// device is open.
pub struct Device {
    pub(super) opened: bool,
    pub(super) extent: Extent,
    pub(super) framebuffer: FrameBuffer,
    pub(super) active_target: ActiveTarget,

    pub(super) streams: [VertexStream; MAX_VERTEX_STREAM_COUNT],

    pub(super) vertex_program: Option<Handle<VertexProgram>>,
    pub(super) fragment_program: Option<Handle<FragmentProgram>>,
    pub(super) vertex_constants: ConstantBank,
    pub(super) fragment_constants: ConstantBank,

    pub(super) masks: WriteMasks,

    pub(super) vertex_buffers: Arena<VertexBuffer>,
    pub(super) index_buffers: Arena<IndexBuffer>,
    pub(super) declarations: Arena<VertexDeclaration>,
    pub(super) textures: Arena<Texture>,
    pub(super) render_targets: Arena<RenderTarget>,
    pub(super) vertex_programs: Arena<VertexProgram>,
    pub(super) fragment_programs: Arena<FragmentProgram>,
}

impl Device {
    /// Opens a device with a default framebuffer of the requested display size.
    pub fn open(init: DeviceInit) -> Result<Self> {
        let DeviceInit { display_width, display_height } = init;
        let extent = display_extent(display_width, display_height)?;

        log::debug!("null device opened ({display_width}x{display_height})");

        Ok(Self {
            opened: true,
            extent,
            framebuffer: FrameBuffer::new(extent),
            active_target: ActiveTarget::Default,
            streams: std::array::from_fn(|_| VertexStream::default()),
            vertex_program: None,
            fragment_program: None,
            vertex_constants: ConstantBank::new(),
            fragment_constants: ConstantBank::new(),
            masks: WriteMasks::default(),
            vertex_buffers: Arena::new(),
            index_buffers: Arena::new(),
            declarations: Arena::new(),
            textures: Arena::new(),
            render_targets: Arena::new(),
            vertex_programs: Arena::new(),
            fragment_programs: Arena::new(),
        })
    }

    /// Closes the device: frees the default planes and every stream's gathered
    /// data, and returns to the default target.
    ///
    /// Resources created through the device stay valid and can still be deleted.
    #[track_caller]
    pub fn close(&mut self) {
        self.assert_open();
        self.opened = false;
        self.framebuffer = FrameBuffer::default();
        self.active_target = ActiveTarget::Default;
        for stream in &mut self.streams {
            stream.unbind();
        }
        self.vertex_program = None;
        self.fragment_program = None;
        log::debug!("null device closed");
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.opened
    }

    #[track_caller]
    pub(super) fn assert_open(&self) {
        assert!(self.opened, "graphics device is not open");
    }

    // ── window queries ────────────────────────────────────────────────────

    pub fn window_param(&self, param: WindowParam) -> u32 {
        match param {
            WindowParam::Opened => u32::from(self.opened),
            _ => 0,
        }
    }

    #[inline]
    pub fn window_width(&self) -> u32 {
        self.extent.width
    }

    #[inline]
    pub fn window_height(&self) -> u32 {
        self.extent.height
    }

    // ── framebuffer ───────────────────────────────────────────────────────

    /// Resizes the display. All four default planes are reallocated; previous
    /// contents are not preserved.
    ///
    /// # Panics
    /// Panics on a zero-sized display or one whose planes cannot be allocated.
    #[track_caller]
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.assert_open();
        self.extent = match display_extent(width, height) {
            Ok(extent) => extent,
            Err(err) => panic!("invalid viewport: {err:#}"),
        };
        self.framebuffer = FrameBuffer::new(self.extent);
        log::debug!("viewport set to {width}x{height}");
    }

    /// The default framebuffer (display-sized).
    #[inline]
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// The plane set clears currently write into.
    #[inline]
    pub fn active_target(&self) -> ActiveTarget {
        self.active_target
    }

    #[track_caller]
    pub fn active_framebuffer(&self) -> &FrameBuffer {
        match self.active_target {
            ActiveTarget::Default => &self.framebuffer,
            ActiveTarget::RenderTarget(rt) => {
                self.render_targets.expect(rt, "render target").framebuffer()
            }
        }
    }

    #[track_caller]
    fn active_framebuffer_mut(&mut self) -> &mut FrameBuffer {
        match self.active_target {
            ActiveTarget::Default => &mut self.framebuffer,
            ActiveTarget::RenderTarget(rt) => self
                .render_targets
                .expect_mut(rt, "render target")
                .framebuffer_mut(),
        }
    }

    /// Fills the requested planes of the active plane set.
    ///
    /// Each pixel of the color plane receives `color` packed as `0xRRGGBBAA`;
    /// depth and stencil planes receive their values replicated. The
    /// accumulation plane is never touched.
    #[track_caller]
    pub fn clear(&mut self, flags: ClearFlags, color: ColorRgba8, depth: f32, stencil: u32) {
        self.assert_open();
        let fb = self.active_framebuffer_mut();
        if flags.contains(ClearFlags::COLOR) {
            fb.fill_color(color);
        }
        if flags.contains(ClearFlags::DEPTH) {
            fb.fill_depth(depth);
        }
        if flags.contains(ClearFlags::STENCIL) {
            fb.fill_stencil(stencil);
        }
    }

    /// Presents the frame. Nothing to present in software.
    #[track_caller]
    pub fn flip(&mut self) {
        self.assert_open();
    }

    // ── fixed-function state (accepted, ignored) ──────────────────────────

    #[track_caller]
    pub fn enable_state(&mut self, state: RenderState) {
        self.assert_open();
        log::trace!("enable_state({state:?}) ignored");
    }

    #[track_caller]
    pub fn disable_state(&mut self, state: RenderState) {
        self.assert_open();
        log::trace!("disable_state({state:?}) ignored");
    }

    #[track_caller]
    pub fn set_blend_func(&mut self, source: BlendFactor, destination: BlendFactor) {
        self.assert_open();
        log::trace!("set_blend_func({source:?}, {destination:?}) ignored");
    }

    #[track_caller]
    pub fn set_cull_face(&mut self, face: FaceType) {
        self.assert_open();
        log::trace!("set_cull_face({face:?}) ignored");
    }

    // ── write masks ───────────────────────────────────────────────────────

    #[track_caller]
    pub fn set_color_mask(&mut self, red: bool, green: bool, blue: bool, alpha: bool) {
        self.assert_open();
        self.masks.color = ColorMask { red, green, blue, alpha };
    }

    #[track_caller]
    pub fn set_depth_mask(&mut self, mask: bool) {
        self.assert_open();
        self.masks.depth = mask;
    }

    #[track_caller]
    pub fn set_index_mask(&mut self, mask: u32) {
        self.assert_open();
        self.masks.index = mask;
    }

    #[track_caller]
    pub fn set_stencil_mask(&mut self, mask: u32) {
        self.assert_open();
        self.masks.stencil = mask;
    }

    #[inline]
    pub fn write_masks(&self) -> WriteMasks {
        self.masks
    }
}

/// Validates a display size shared by open and viewport changes.
fn display_extent(width: u32, height: u32) -> Result<Extent> {
    anyhow::ensure!(width > 0 && height > 0, "display has zero size ({width}x{height})");
    let extent = Extent::new(width, height);
    extent
        .pixel_count()
        .checked_mul(PLANE_BYTES_PER_PIXEL)
        .context("display size overflows plane allocation")?;
    Ok(extent)
}
