use crate::{ErrorReporter, ProviderError};
use signcam_base::{FrameBuffers, OutputTensor, TENSOR_CHANNELS, TENSOR_HEIGHT, TENSOR_WIDTH};
use signcam_camera::FrameSource;

/// Run one capture, convert, resample cycle into `image_data`.
///
/// The requested shape must be exactly `TENSOR_WIDTH x TENSOR_HEIGHT x
/// TENSOR_CHANNELS`; anything else is rejected before the source is touched.
/// `buffers` are scratch space reused across calls.
///
/// On error `image_data` is left exactly as it was and a description of the
/// failure is passed to `reporter`. Nothing is retried here; skipping or
/// retrying a cycle is the caller's decision.
///
/// # Errors
///
/// Returns `ProviderError::UnsupportedResolution` for any other requested
/// shape and `ProviderError::CaptureFailure` when the source fails.
pub fn get_image<S: FrameSource + ?Sized>(
    reporter: &mut dyn ErrorReporter,
    source: &mut S,
    buffers: &mut FrameBuffers,
    wanted_width: usize,
    wanted_height: usize,
    wanted_channels: usize,
    image_data: &mut OutputTensor,
) -> Result<(), ProviderError> {
    let result = run_cycle(
        source,
        buffers,
        (wanted_width, wanted_height, wanted_channels),
        image_data,
    );
    if let Err(err) = &result {
        log::debug!("image cycle aborted: {err}");
        reporter.report(&err.to_string());
    }
    result
}

fn run_cycle<S: FrameSource + ?Sized>(
    source: &mut S,
    buffers: &mut FrameBuffers,
    (width, height, channels): (usize, usize, usize),
    image_data: &mut OutputTensor,
) -> Result<(), ProviderError> {
    if (width, height, channels) != (TENSOR_WIDTH, TENSOR_HEIGHT, TENSOR_CHANNELS) {
        return Err(ProviderError::UnsupportedResolution {
            width,
            height,
            channels,
        });
    }

    source.capture_into(buffers.raw_mut())?;

    let (raw, luma) = buffers.split_mut();
    signcam_image::convert_frame(raw, luma);
    signcam_image::resize_to_tensor(buffers.luma(), image_data);

    log::trace!("image cycle complete");
    Ok(())
}

/// Counters kept by `ImageProvider`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProviderStats {
    pub frames: u64,
    pub capture_failures: u64,
    pub rejected_requests: u64,
}

/// A frame source bundled with the scratch buffers it needs.
///
/// Buffers are allocated once in `new` and reused for every call.
#[derive(Debug)]
pub struct ImageProvider<S> {
    source: S,
    buffers: FrameBuffers,
    stats: ProviderStats,
}

impl<S: FrameSource> ImageProvider<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            buffers: FrameBuffers::new(),
            stats: ProviderStats::default(),
        }
    }

    /// Same contract as [`get_image`], using the owned source and buffers.
    pub fn get_image(
        &mut self,
        reporter: &mut dyn ErrorReporter,
        wanted_width: usize,
        wanted_height: usize,
        wanted_channels: usize,
        image_data: &mut OutputTensor,
    ) -> Result<(), ProviderError> {
        let result = get_image(
            reporter,
            &mut self.source,
            &mut self.buffers,
            wanted_width,
            wanted_height,
            wanted_channels,
            image_data,
        );
        match &result {
            Ok(()) => self.stats.frames += 1,
            Err(ProviderError::CaptureFailure(_)) => self.stats.capture_failures += 1,
            Err(ProviderError::UnsupportedResolution { .. }) => self.stats.rejected_requests += 1,
        }
        result
    }

    pub fn stats(&self) -> ProviderStats {
        self.stats
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
