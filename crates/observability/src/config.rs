//! Environment-driven logging configuration.
//!
//! - `PETCODE_LOG`: filter directives, falling back to `RUST_LOG`, then `info`
//! - `PETCODE_LOG_FORMAT`: `json` (default) or `pretty`

use thiserror::Error;

pub const FILTER_VAR: &str = "PETCODE_LOG";
pub const FALLBACK_FILTER_VAR: &str = "RUST_LOG";
pub const FORMAT_VAR: &str = "PETCODE_LOG_FORMAT";
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log format {0:?}, expected `json` or `pretty`")]
pub struct UnknownLogFormat(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl core::str::FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `petcode_book=debug,info`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// Blank values count as unset. An unrecognized format falls back to
    /// JSON, since nothing can be logged before the subscriber exists.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let filter = non_blank(FILTER_VAR)
            .or_else(|| non_blank(FALLBACK_FILTER_VAR))
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = non_blank(FORMAT_VAR)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self { filter, format }
    }
}
