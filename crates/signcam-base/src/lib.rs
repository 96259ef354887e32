//! Shared building blocks for the signcam crates.
//!
//! Frame geometry is fixed at compile time: the sensor delivers
//! `CAPTURE_WIDTH x CAPTURE_HEIGHT` RGB565 pixels and the model consumes a
//! `TENSOR_WIDTH x TENSOR_HEIGHT` single-channel tensor.

pub mod frame;
pub mod logging;

pub use frame::{
    CAPTURE_HEIGHT, CAPTURE_PIXELS, CAPTURE_WIDTH, FrameBuffers, LumaFrame, OutputTensor,
    RawFrame, TENSOR_CHANNELS, TENSOR_HEIGHT, TENSOR_LEN, TENSOR_WIDTH, empty_tensor,
    pack_rgb565,
};
pub use logging::{StdoutLogger, init_stdout_logger};

// Re-export log crate so downstream crates can use signcam_base::log::*
pub use log;
