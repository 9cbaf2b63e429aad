/// Window property queried through [`Device::window_param`](super::Device::window_param).
///
/// There is no real window behind the software device. `Opened` tracks the
/// device lifecycle; every other parameter reports 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WindowParam {
    Opened,
    Active,
    Iconified,
    Accelerated,
    RedBits,
    GreenBits,
    BlueBits,
    AlphaBits,
    DepthBits,
    StencilBits,
}
