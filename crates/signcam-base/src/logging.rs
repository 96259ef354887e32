use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable that overrides the default max level.
pub const LOG_LEVEL_ENV: &str = "SIGNCAM_LOG";

/// A logger that writes one line per record to stdout.
///
/// Line format: `2026-10-19T08:15:02.431 [INFO] signcam_provider - message`
pub struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = std::io::stdout().lock();
        // Write errors are dropped
        let _ = writeln!(out, "{}", format_record(record));
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

pub(crate) fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] {} - {}",
        format_timestamp(SystemTime::now()),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Format a wall-clock time as `YYYY-MM-DDTHH:MM:SS.mmm` (UTC).
pub fn format_timestamp(time: SystemTime) -> String {
    let since_epoch = time.duration_since(UNIX_EPOCH).unwrap_or_default();
    let secs = since_epoch.as_secs();
    let millis = since_epoch.subsec_millis();

    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    let time_of_day = secs % 86_400;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60,
        millis
    )
}

/// Days since the Unix epoch to a proleptic Gregorian (year, month, day).
/// Howard Hinnant's `civil_from_days`.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe as i64 + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Parse a level name as accepted in `SIGNCAM_LOG`.
///
/// Case-insensitive; returns `None` for anything unrecognized.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Max level used when `SIGNCAM_LOG` is unset or unparsable.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize the global logger with `StdoutLogger`.
///
/// The max level comes from `SIGNCAM_LOG` when set, otherwise Debug for
/// debug builds and Info for release builds.
///
/// Only the first call per process installs the logger; later calls are
/// silently ignored.
pub fn init_stdout_logger() {
    static LOGGER: StdoutLogger = StdoutLogger;

    let max_level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or_else(default_level);

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}
