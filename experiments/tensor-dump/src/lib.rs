use signcam_camera::Pattern;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_CYCLES: u32 = 10;
pub const DEFAULT_INTERVAL_MS: u64 = 100;
pub const DEFAULT_OUTPUT: &str = "tensor.png";

#[derive(Debug)]
pub struct ConfigError(String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

/// Where frames come from.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceKind {
    Pattern(Pattern),
    Replay(PathBuf),
}

/// Settings for one `tensor-dump` run.
#[derive(Clone, Debug, PartialEq)]
pub struct DumpConfig {
    source: SourceKind,
    output: PathBuf,
    cycles: u32,
    interval_ms: u64,
}

impl DumpConfig {
    /// Build the config from positional args and an environment lookup.
    ///
    /// Args: `[recording|pattern] [output.png]`. Environment:
    /// `SIGNCAM_REPLAY`, `SIGNCAM_PATTERN` (`ramp`, `checker`, `white`),
    /// `SIGNCAM_CYCLES`, `SIGNCAM_INTERVAL_MS`. Positional args win over the
    /// environment.
    pub fn from_parts(
        mut args: impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let source_arg = args.next().or_else(|| env("SIGNCAM_REPLAY"));
        let source = match source_arg.as_deref() {
            None | Some("pattern") => {
                SourceKind::Pattern(parse_pattern(env("SIGNCAM_PATTERN").as_deref())?)
            }
            Some(path) => SourceKind::Replay(PathBuf::from(path)),
        };

        let output = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let cycles = match env("SIGNCAM_CYCLES") {
            Some(v) => v
                .parse()
                .map_err(|e| ConfigError(format!("SIGNCAM_CYCLES={v}: {e}")))?,
            None => DEFAULT_CYCLES,
        };
        let interval_ms = match env("SIGNCAM_INTERVAL_MS") {
            Some(v) => v
                .parse()
                .map_err(|e| ConfigError(format!("SIGNCAM_INTERVAL_MS={v}: {e}")))?,
            None => DEFAULT_INTERVAL_MS,
        };
        if interval_ms == 0 {
            return Err(ConfigError("SIGNCAM_INTERVAL_MS must be positive".to_string()));
        }

        Ok(Self {
            source,
            output,
            cycles,
            interval_ms,
        })
    }

    pub fn source(&self) -> &SourceKind {
        &self.source
    }

    pub fn output(&self) -> &PathBuf {
        &self.output
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

fn parse_pattern(name: Option<&str>) -> Result<Pattern, ConfigError> {
    match name.unwrap_or("ramp") {
        "ramp" => Ok(Pattern::HorizontalRamp),
        "checker" => Ok(Pattern::Checkerboard {
            cell: 16,
            a: 0xFFFF,
            b: 0x0000,
        }),
        "white" => Ok(Pattern::Solid(0xFFFF)),
        other => Err(ConfigError(format!("unknown pattern '{other}'"))),
    }
}
