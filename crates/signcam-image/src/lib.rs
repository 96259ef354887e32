//! Pixel processing for signcam.
//!
//! Converts RGB565 sensor frames to 8-bit luma, downsamples luma frames to the
//! fixed model input size, and exports tensors for inspection.
//!
//! The conversion and resampling paths work in place on caller-provided
//! buffers and never allocate.

pub mod convert;
pub mod error;
pub mod export;
pub mod resample;

pub use convert::{convert_frame, rgb565_to_luma, rgb565_to_luma_slice};
pub use error::ImageError;
pub use export::{encode_png, save_png, tensor_to_ascii};
pub use resample::{resize_nearest, resize_to_tensor};
