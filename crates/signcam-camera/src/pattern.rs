use crate::{CaptureError, FrameSource};
use signcam_base::{CAPTURE_WIDTH, RawFrame, pack_rgb565};

/// Synthetic scene rendered by `PatternSource`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Every pixel set to the same RGB565 value.
    Solid(u16),
    /// Square cells of `cell` pixels alternating between `a` and `b`,
    /// starting with `a` at the top-left corner.
    Checkerboard { cell: usize, a: u16, b: u16 },
    /// Gray ramp from black at the left edge to white at the right edge.
    /// Columns past the frame edge stay white.
    HorizontalRamp,
}

impl Pattern {
    /// RGB565 value at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> u16 {
        match *self {
            Pattern::Solid(value) => value,
            Pattern::Checkerboard { cell, a, b } => {
                let cell = cell.max(1);
                if (x / cell + y / cell) % 2 == 0 { a } else { b }
            }
            Pattern::HorizontalRamp => {
                let x = x.min(CAPTURE_WIDTH - 1);
                let level = (x * 255 / (CAPTURE_WIDTH - 1)) as u8;
                pack_rgb565(level, level, level)
            }
        }
    }
}

/// Frame source that renders a fixed pattern on every capture.
///
/// Never fails. Useful for bench runs without a sensor attached.
#[derive(Debug)]
pub struct PatternSource {
    pattern: Pattern,
    frames_delivered: u64,
}

impl PatternSource {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            frames_delivered: 0,
        }
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn frames_delivered(&self) -> u64 {
        self.frames_delivered
    }
}

impl FrameSource for PatternSource {
    fn capture_into(&mut self, frame: &mut RawFrame) -> Result<(), CaptureError> {
        for (y, row) in frame.chunks_exact_mut(CAPTURE_WIDTH).enumerate() {
            for (x, px) in row.iter_mut().enumerate() {
                *px = self.pattern.pixel(x, y);
            }
        }
        self.frames_delivered += 1;
        Ok(())
    }
}
