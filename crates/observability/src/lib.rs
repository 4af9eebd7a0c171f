//! Tracing and logging setup shared by every binary and test harness.

pub mod config;
pub mod subscriber;

pub use config::{LogFormat, ObservabilityConfig, UnknownLogFormat};
pub use subscriber::init_with;

/// Initialize process-wide logging from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with(&ObservabilityConfig::from_env());
}
