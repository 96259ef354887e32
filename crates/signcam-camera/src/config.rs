use std::path::{Path, PathBuf};

/// Byte order of the 16-bit pixels in a raw recording.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

/// Configuration for replaying a raw RGB565 recording.
#[derive(Clone, Debug)]
pub struct ReplayConfig {
    path: PathBuf,
    byte_order: ByteOrder,
    looping: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("frames.rgb565"),
            byte_order: ByteOrder::Little,
            looping: true,
        }
    }
}

impl ReplayConfig {
    /// Set the recording path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the pixel byte order.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Rewind to the first frame at the end of the recording instead of
    /// reporting `CaptureError::Exhausted`.
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn looping(&self) -> bool {
        self.looping
    }
}
