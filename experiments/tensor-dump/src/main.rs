use signcam_base::{TENSOR_CHANNELS, TENSOR_HEIGHT, TENSOR_WIDTH, empty_tensor, log};
use signcam_camera::{CaptureError, FrameSource, PatternSource, ReplayConfig, ReplaySource};
use signcam_provider::{ImageProvider, LogReporter, ProviderError};
use std::env;
use std::time::Duration;
use tensor_dump::{DumpConfig, SourceKind};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    signcam_base::init_stdout_logger();

    let config = DumpConfig::from_parts(env::args().skip(1), |key| env::var(key).ok())?;

    let source: Box<dyn FrameSource> = match config.source() {
        SourceKind::Pattern(pattern) => {
            log::info!("Source: pattern {:?}", pattern);
            Box::new(PatternSource::new(*pattern))
        }
        SourceKind::Replay(path) => {
            // Play a recording once; the last good frame is what gets dumped
            let replay = ReplayConfig::default().with_path(path).with_looping(false);
            Box::new(ReplaySource::open(replay)?)
        }
    };

    let mut provider = ImageProvider::new(source);
    let mut reporter = LogReporter;
    let mut tensor = empty_tensor();
    let mut have_frame = false;

    log::info!(
        "Running {} cycles every {} ms",
        config.cycles(),
        config.interval_ms()
    );
    let mut ticker = tokio::time::interval(Duration::from_millis(config.interval_ms()));

    for cycle in 0..config.cycles() {
        ticker.tick().await;

        match provider.get_image(
            &mut reporter,
            TENSOR_WIDTH,
            TENSOR_HEIGHT,
            TENSOR_CHANNELS,
            &mut tensor,
        ) {
            Ok(()) => {
                have_frame = true;
                log::debug!("cycle {cycle}: tensor ready");
            }
            Err(ProviderError::CaptureFailure(CaptureError::Exhausted)) => {
                log::info!("Recording finished after {cycle} cycles");
                break;
            }
            Err(err) => log::warn!("cycle {cycle} skipped: {err}"),
        }
    }

    let stats = provider.stats();
    log::info!(
        "Frames: {}, capture failures: {}",
        stats.frames,
        stats.capture_failures
    );

    if !have_frame {
        log::warn!("No frame captured, nothing written");
        return Ok(());
    }

    signcam_image::save_png(&tensor, config.output())?;
    log::info!("Wrote {}", config.output().display());
    log::info!("Preview:\n{}", signcam_image::tensor_to_ascii(&tensor));

    Ok(())
}
