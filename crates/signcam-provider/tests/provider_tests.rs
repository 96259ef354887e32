use signcam_base::{CAPTURE_PIXELS, CAPTURE_WIDTH, FrameBuffers, RawFrame, TENSOR_LEN};
use signcam_camera::{CaptureError, FrameSource, Pattern, PatternSource};
use signcam_provider::{
    ErrorReporter, ImageProvider, NullReporter, ProviderError, ProviderStats, Status, get_image,
};

/// Replays the same captured frame on every call.
struct FixedSource {
    frame: Box<RawFrame>,
    calls: usize,
}

impl FixedSource {
    fn new(fill: impl Fn(usize, usize) -> u16) -> Self {
        let mut frame = Box::new([0u16; CAPTURE_PIXELS]);
        for (i, px) in frame.iter_mut().enumerate() {
            *px = fill(i % CAPTURE_WIDTH, i / CAPTURE_WIDTH);
        }
        Self { frame, calls: 0 }
    }
}

impl FrameSource for FixedSource {
    fn capture_into(&mut self, frame: &mut RawFrame) -> Result<(), CaptureError> {
        self.calls += 1;
        frame.copy_from_slice(&self.frame[..]);
        Ok(())
    }
}

/// Fails every capture after scribbling over the buffer.
struct FailingSource {
    calls: usize,
}

impl FrameSource for FailingSource {
    fn capture_into(&mut self, frame: &mut RawFrame) -> Result<(), CaptureError> {
        self.calls += 1;
        frame.fill(0xFFFF);
        Err(CaptureError::Device("sensor timeout".to_string()))
    }
}

/// Succeeds `ok_count` times, then fails.
struct FlakySource {
    ok_count: usize,
}

impl FrameSource for FlakySource {
    fn capture_into(&mut self, frame: &mut RawFrame) -> Result<(), CaptureError> {
        if self.ok_count == 0 {
            return Err(CaptureError::Exhausted);
        }
        self.ok_count -= 1;
        frame.fill(0xFFFF);
        Ok(())
    }
}

#[derive(Default)]
struct CollectingReporter {
    messages: Vec<String>,
}

impl ErrorReporter for CollectingReporter {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[test]
fn test_white_frame_gives_white_tensor() {
    let mut source = FixedSource::new(|_, _| 0xFFFF);
    let mut buffers = FrameBuffers::new();
    let mut image = [0u8; TENSOR_LEN];

    get_image(&mut NullReporter, &mut source, &mut buffers, 32, 32, 1, &mut image).unwrap();

    assert!(image.iter().all(|&v| v == 255));
    assert_eq!(source.calls, 1);
}

#[test]
fn test_pipeline_converts_then_resamples() {
    // Left half red, right half blue. Output column x samples source column
    // x * 176 / 32, which crosses 88 at x = 16.
    let mut source = FixedSource::new(|x, _| if x < 88 { 0xF800 } else { 0x001F });
    let mut buffers = FrameBuffers::new();
    let mut image = [0u8; TENSOR_LEN];

    get_image(&mut NullReporter, &mut source, &mut buffers, 32, 32, 1, &mut image).unwrap();

    for row in image.chunks_exact(32) {
        assert!(row[..16].iter().all(|&v| v == 76));
        assert!(row[16..].iter().all(|&v| v == 29));
    }
}

#[test]
fn test_identical_frames_give_identical_tensors() {
    let mut source = FixedSource::new(|x, y| ((x * 373 + y * 91) % 65536) as u16);
    let mut buffers = FrameBuffers::new();
    let mut first = [0u8; TENSOR_LEN];
    let mut second = [0x55u8; TENSOR_LEN];

    get_image(&mut NullReporter, &mut source, &mut buffers, 32, 32, 1, &mut first).unwrap();
    get_image(&mut NullReporter, &mut source, &mut buffers, 32, 32, 1, &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_stale_buffers_do_not_leak_into_output() {
    let mut buffers = FrameBuffers::new();
    let mut image = [0u8; TENSOR_LEN];

    let mut white = FixedSource::new(|_, _| 0xFFFF);
    get_image(&mut NullReporter, &mut white, &mut buffers, 32, 32, 1, &mut image).unwrap();

    let mut black = FixedSource::new(|_, _| 0x0000);
    get_image(&mut NullReporter, &mut black, &mut buffers, 32, 32, 1, &mut image).unwrap();

    assert!(image.iter().all(|&v| v == 0));
}

#[test]
fn test_unsupported_width_is_rejected() {
    let mut source = FixedSource::new(|_, _| 0xFFFF);
    let mut buffers = FrameBuffers::new();
    let mut image = [7u8; TENSOR_LEN];

    let result = get_image(&mut NullReporter, &mut source, &mut buffers, 64, 32, 1, &mut image);

    match result {
        Err(ProviderError::UnsupportedResolution {
            width,
            height,
            channels,
        }) => assert_eq!((width, height, channels), (64, 32, 1)),
        other => panic!("Expected UnsupportedResolution, got {:?}", other),
    }
    assert!(image.iter().all(|&v| v == 7));
    assert_eq!(source.calls, 0, "source must not be touched on rejection");
}

#[test]
fn test_unsupported_height_and_channels_are_rejected() {
    let mut source = FixedSource::new(|_, _| 0);
    let mut buffers = FrameBuffers::new();
    let mut image = [0u8; TENSOR_LEN];

    for (w, h, c) in [(32, 16, 1), (32, 32, 3), (0, 0, 0), (96, 96, 1)] {
        let result = get_image(&mut NullReporter, &mut source, &mut buffers, w, h, c, &mut image);
        assert_eq!(Status::from(&result), Status::UnsupportedResolution);
    }
}

#[test]
fn test_capture_failure_leaves_output_untouched() {
    let mut source = FailingSource { calls: 0 };
    let mut buffers = FrameBuffers::new();
    let mut image = [42u8; TENSOR_LEN];
    let mut reporter = CollectingReporter::default();

    let result = get_image(&mut reporter, &mut source, &mut buffers, 32, 32, 1, &mut image);

    match result {
        Err(ProviderError::CaptureFailure(CaptureError::Device(msg))) => {
            assert!(msg.contains("sensor timeout"))
        }
        other => panic!("Expected CaptureFailure, got {:?}", other),
    }
    assert!(image.iter().all(|&v| v == 42));
    assert_eq!(source.calls, 1);
    assert_eq!(reporter.messages.len(), 1);
    assert!(reporter.messages[0].contains("capture failed"));
}

#[test]
fn test_reporter_not_used_on_success() {
    let mut source = FixedSource::new(|_, _| 0);
    let mut buffers = FrameBuffers::new();
    let mut image = [0u8; TENSOR_LEN];
    let mut reporter = CollectingReporter::default();

    get_image(&mut reporter, &mut source, &mut buffers, 32, 32, 1, &mut image).unwrap();

    assert!(reporter.messages.is_empty());
}

#[test]
fn test_image_provider_counts_outcomes() {
    let mut provider = ImageProvider::new(FlakySource { ok_count: 2 });
    let mut image = [0u8; TENSOR_LEN];
    let mut reporter = CollectingReporter::default();

    provider.get_image(&mut reporter, 32, 32, 1, &mut image).unwrap();
    provider.get_image(&mut reporter, 32, 32, 1, &mut image).unwrap();
    assert!(provider.get_image(&mut reporter, 64, 32, 1, &mut image).is_err());
    assert!(provider.get_image(&mut reporter, 32, 32, 1, &mut image).is_err());

    assert_eq!(
        provider.stats(),
        ProviderStats {
            frames: 2,
            capture_failures: 1,
            rejected_requests: 1,
        }
    );
    assert_eq!(reporter.messages.len(), 2);
    assert_eq!(provider.source().ok_count, 0);
}

#[test]
fn test_image_provider_with_pattern_source() {
    let pattern = Pattern::Checkerboard {
        cell: 1,
        a: 0xFFFF,
        b: 0x0000,
    };
    let mut provider = ImageProvider::new(PatternSource::new(pattern));
    let mut image = [0u8; TENSOR_LEN];

    provider.get_image(&mut NullReporter, 32, 32, 1, &mut image).unwrap();

    // Output (x, y) samples source (floor(5.5x), floor(4.5y)); parity of the
    // sum decides the cell.
    for y in 0..32 {
        for x in 0..32 {
            let parity = (x * 176 / 32 + y * 144 / 32) % 2;
            let expected = if parity == 0 { 255 } else { 0 };
            assert_eq!(image[y * 32 + x], expected, "at ({x}, {y})");
        }
    }
    assert_eq!(provider.into_source().frames_delivered(), 1);
}

#[test]
fn test_get_image_accepts_trait_object_source() {
    let mut source: Box<dyn FrameSource> = Box::new(FixedSource::new(|_, _| 0x07E0));
    let mut buffers = FrameBuffers::new();
    let mut image = [0u8; TENSOR_LEN];

    get_image(&mut NullReporter, source.as_mut(), &mut buffers, 32, 32, 1, &mut image).unwrap();

    assert!(image.iter().all(|&v| v == 149));
}
