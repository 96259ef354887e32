use crate::{ByteOrder, CaptureError, FrameSource, ReplayConfig};
use memmap2::Mmap;
use signcam_base::{CAPTURE_PIXELS, RawFrame};
use std::fs::File;

/// Size in bytes of one raw frame in a recording.
pub const FRAME_BYTES: usize = CAPTURE_PIXELS * 2;

/// Frame source that plays back a raw RGB565 recording.
///
/// A recording is a plain concatenation of frames, `FRAME_BYTES` each, with
/// no header. The file is memory-mapped once when the source is opened.
pub struct ReplaySource {
    config: ReplayConfig,
    mmap: Mmap,
    frame_count: usize,
    cursor: usize,
}

impl std::fmt::Debug for ReplaySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplaySource")
            .field("config", &self.config)
            .field("frame_count", &self.frame_count)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl ReplaySource {
    /// Open the recording at `config.path()`.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::Io` if the file cannot be opened or mapped, and
    /// `CaptureError::Format` if it is empty or its length is not a whole
    /// number of frames.
    pub fn open(config: ReplayConfig) -> Result<Self, CaptureError> {
        let file = File::open(config.path())?;
        let len = file.metadata()?.len() as usize;
        if len == 0 || len % FRAME_BYTES != 0 {
            return Err(CaptureError::Format(format!(
                "{}: {len} bytes is not a whole number of {FRAME_BYTES}-byte frames",
                config.path().display()
            )));
        }

        // SAFETY: the recording is treated as read-only input; truncating it
        // while a replay is running is outside the supported use.
        let mmap = unsafe { Mmap::map(&file) }
            .map_err(|e| CaptureError::Io(format!("failed to memory-map recording: {e}")))?;

        let frame_count = len / FRAME_BYTES;
        log::info!(
            "replaying {} ({frame_count} frames, {:?} endian)",
            config.path().display(),
            config.byte_order()
        );

        Ok(Self {
            config,
            mmap,
            frame_count,
            cursor: 0,
        })
    }

    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    /// Number of frames in the recording.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Index of the frame the next capture will deliver.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl FrameSource for ReplaySource {
    fn capture_into(&mut self, frame: &mut RawFrame) -> Result<(), CaptureError> {
        if self.cursor == self.frame_count {
            if !self.config.looping() {
                return Err(CaptureError::Exhausted);
            }
            log::debug!("end of recording, rewinding");
            self.cursor = 0;
        }

        let start = self.cursor * FRAME_BYTES;
        let bytes = &self.mmap[start..start + FRAME_BYTES];
        let order = self.config.byte_order();
        for (px, pair) in frame.iter_mut().zip(bytes.chunks_exact(2)) {
            let pair = [pair[0], pair[1]];
            *px = match order {
                ByteOrder::Little => u16::from_le_bytes(pair),
                ByteOrder::Big => u16::from_be_bytes(pair),
            };
        }

        self.cursor += 1;
        Ok(())
    }
}

/// Serialize a frame in the recording layout read by `ReplaySource`.
pub fn frame_to_bytes(frame: &RawFrame, order: ByteOrder) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(FRAME_BYTES);
    for &px in frame.iter() {
        match order {
            ByteOrder::Little => bytes.extend_from_slice(&px.to_le_bytes()),
            ByteOrder::Big => bytes.extend_from_slice(&px.to_be_bytes()),
        }
    }
    bytes
}
