//! Frame capture abstraction for signcam.
//!
//! This crate provides the `FrameSource` trait that the image provider pulls
//! RGB565 frames from, plus sources that work without camera hardware.

pub mod config;
pub mod error;
pub mod pattern;
pub mod replay;
pub mod traits;

pub use config::{ByteOrder, ReplayConfig};
pub use error::CaptureError;
pub use pattern::{Pattern, PatternSource};
pub use replay::{FRAME_BYTES, ReplaySource, frame_to_bytes};
pub use traits::FrameSource;
