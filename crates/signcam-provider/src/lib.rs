//! Image provider for the on-device sign classifier.
//!
//! One call to [`get_image`] runs a full cycle: capture an RGB565 frame from a
//! [`FrameSource`](signcam_camera::FrameSource), convert it to luma, and
//! downsample it into the caller's 32x32 tensor.

pub mod error;
pub mod provider;
pub mod reporter;

pub use error::{ProviderError, Status};
pub use provider::{ImageProvider, ProviderStats, get_image};
pub use reporter::{ErrorReporter, LogReporter, NullReporter};
