/// Parameters for opening a [`Device`](super::Device).
///
/// Keep this structure minimal. The software device has no adapter, surface or
/// present mode to choose; only the display size matters.
#[derive(Debug, Clone)]
pub struct DeviceInit {
    /// Width of the default framebuffer in pixels. Must be non-zero.
    pub display_width: u32,

    /// Height of the default framebuffer in pixels. Must be non-zero.
    pub display_height: u32,
}

impl DeviceInit {
    #[inline]
    pub const fn new(display_width: u32, display_height: u32) -> Self {
        Self { display_width, display_height }
    }
}

impl Default for DeviceInit {
    fn default() -> Self {
        Self { display_width: 1280, display_height: 720 }
    }
}
