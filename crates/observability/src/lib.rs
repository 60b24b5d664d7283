//! Process-wide tracing setup shared by the service binaries.

pub mod logging;

pub use logging::LogFormat;

/// Initialize tracing for the process, reading `RUST_LOG` and `LOG_FORMAT`.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init(service: &str) {
    logging::init(service, LogFormat::from_env());
}
