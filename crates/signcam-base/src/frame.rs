/// Sensor capture width in pixels.
pub const CAPTURE_WIDTH: usize = 176;
/// Sensor capture height in pixels.
pub const CAPTURE_HEIGHT: usize = 144;
pub const CAPTURE_PIXELS: usize = CAPTURE_WIDTH * CAPTURE_HEIGHT;

/// Model input width.
pub const TENSOR_WIDTH: usize = 32;
/// Model input height.
pub const TENSOR_HEIGHT: usize = 32;
/// Model input channel count (luma only).
pub const TENSOR_CHANNELS: usize = 1;
pub const TENSOR_LEN: usize = TENSOR_WIDTH * TENSOR_HEIGHT * TENSOR_CHANNELS;

/// One sensor frame, row-major RGB565.
pub type RawFrame = [u16; CAPTURE_PIXELS];

/// One sensor frame converted to 8-bit luma, row-major.
pub type LumaFrame = [u8; CAPTURE_PIXELS];

/// The model input, row-major `[height, width, 1]`.
pub type OutputTensor = [u8; TENSOR_LEN];

/// Scratch buffers reused by every capture cycle.
///
/// Allocated once at startup and lent to the pipeline by `&mut`. The contents
/// only have meaning while a cycle is running; callers must not treat them as
/// stable state between calls.
pub struct FrameBuffers {
    raw: Box<RawFrame>,
    luma: Box<LumaFrame>,
}

impl Default for FrameBuffers {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameBuffers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffers")
            .field("raw", &format_args!("[u16; {}]", CAPTURE_PIXELS))
            .field("luma", &format_args!("[u8; {}]", CAPTURE_PIXELS))
            .finish()
    }
}

impl FrameBuffers {
    pub fn new() -> Self {
        Self {
            raw: Box::new([0u16; CAPTURE_PIXELS]),
            luma: Box::new([0u8; CAPTURE_PIXELS]),
        }
    }

    pub fn raw(&self) -> &RawFrame {
        &self.raw
    }

    pub fn raw_mut(&mut self) -> &mut RawFrame {
        &mut self.raw
    }

    pub fn luma(&self) -> &LumaFrame {
        &self.luma
    }

    pub fn luma_mut(&mut self) -> &mut LumaFrame {
        &mut self.luma
    }

    /// Borrow both buffers at once, raw read-only and luma writable.
    ///
    /// This is the shape the color conversion step needs.
    pub fn split_mut(&mut self) -> (&RawFrame, &mut LumaFrame) {
        (&self.raw, &mut self.luma)
    }
}

/// Returns a zeroed output tensor.
pub fn empty_tensor() -> OutputTensor {
    [0u8; TENSOR_LEN]
}

/// Pack 8-bit channel intensities into one RGB565 pixel.
///
/// Low bits that don't fit the 5/6/5 fields are dropped.
pub fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    (((r as u16) >> 3) << 11) | (((g as u16) >> 2) << 5) | ((b as u16) >> 3)
}
