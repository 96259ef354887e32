use crate::CaptureError;
use signcam_base::RawFrame;

/// Blocking frame capture.
///
/// Implementations fill the caller's buffer with exactly one
/// `CAPTURE_WIDTH x CAPTURE_HEIGHT` RGB565 frame, row-major. On error the
/// buffer contents are unspecified and must not be used.
pub trait FrameSource {
    /// Capture the next frame into `frame`.
    fn capture_into(&mut self, frame: &mut RawFrame) -> Result<(), CaptureError>;
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    fn capture_into(&mut self, frame: &mut RawFrame) -> Result<(), CaptureError> {
        (**self).capture_into(frame)
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn capture_into(&mut self, frame: &mut RawFrame) -> Result<(), CaptureError> {
        (**self).capture_into(frame)
    }
}
