use signcam_camera::CaptureError;
use std::fmt;

#[derive(Debug)]
pub enum ProviderError {
    /// The frame source could not deliver a frame. The output was not touched.
    CaptureFailure(CaptureError),
    /// The caller asked for a tensor shape other than 32x32x1.
    UnsupportedResolution {
        width: usize,
        height: usize,
        channels: usize,
    },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::CaptureFailure(err) => write!(f, "capture failed: {err}"),
            ProviderError::UnsupportedResolution {
                width,
                height,
                channels,
            } => write!(
                f,
                "unsupported resolution {width}x{height}x{channels}, only {}x{}x{} is produced",
                signcam_base::TENSOR_WIDTH,
                signcam_base::TENSOR_HEIGHT,
                signcam_base::TENSOR_CHANNELS
            ),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::CaptureFailure(err) => Some(err),
            ProviderError::UnsupportedResolution { .. } => None,
        }
    }
}

impl From<CaptureError> for ProviderError {
    fn from(err: CaptureError) -> Self {
        ProviderError::CaptureFailure(err)
    }
}

/// Outcome of one provider call as a plain status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    CaptureFailure,
    UnsupportedResolution,
}

impl ProviderError {
    pub fn status(&self) -> Status {
        match self {
            ProviderError::CaptureFailure(_) => Status::CaptureFailure,
            ProviderError::UnsupportedResolution { .. } => Status::UnsupportedResolution,
        }
    }
}

impl<T> From<&Result<T, ProviderError>> for Status {
    fn from(result: &Result<T, ProviderError>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(err) => err.status(),
        }
    }
}

impl Status {
    pub fn is_ok(&self) -> bool {
        *self == Status::Ok
    }
}
