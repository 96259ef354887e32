use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CaptureError {
    /// The sensor or its driver refused to deliver a frame.
    Device(String),
    Io(String),
    /// A finite source has no frames left.
    Exhausted,
    /// Source data does not hold whole RGB565 frames.
    Format(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Device(msg) => write!(f, "device error: {msg}"),
            CaptureError::Io(msg) => write!(f, "io error: {msg}"),
            CaptureError::Exhausted => write!(f, "no frames left in source"),
            CaptureError::Format(msg) => write!(f, "format error: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<io::Error> for CaptureError {
    fn from(err: io::Error) -> Self {
        CaptureError::Io(err.to_string())
    }
}
