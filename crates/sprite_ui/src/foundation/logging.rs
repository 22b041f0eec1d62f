//! Logging setup
//!
//! The library logs through the `log` facade; binaries pick the sink.

pub use log::{debug, error, info, trace, warn};

/// Initialize env_logger as the global logger
///
/// Call once at startup from the binary. Filtering is controlled through
/// the `RUST_LOG` environment variable.
pub fn init() {
    env_logger::init();
}

/// Like [`init`], but tolerates an already-installed logger
///
/// Useful in tests where several cases may race to install one.
pub fn try_init() {
    let _ = env_logger::try_init();
}
