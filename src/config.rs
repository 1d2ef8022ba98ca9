//! Logging configuration for the native bridge.

use log::LevelFilter;

/// Tag under which every native trace is emitted (logcat tag on Android,
/// `log` target elsewhere).
pub const LOG_TAG: &str = "SmsNotificationListener";

/// Level used when `RUST_LOG` is absent or not one of the known level names.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub tag: &'static str,
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            tag: LOG_TAG,
            level: DEFAULT_LEVEL,
        }
    }
}

impl LogConfig {
    /// Reads the level from `RUST_LOG`.
    pub fn from_env() -> Self {
        Self {
            level: parse_level(std::env::var("RUST_LOG").ok().as_deref()),
            ..Self::default()
        }
    }
}

/// Maps a `RUST_LOG` value to a level filter. Only the bare level names are
/// understood; module directives fall back to the default.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    match value {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => DEFAULT_LEVEL,
    }
}
