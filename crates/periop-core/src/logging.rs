//! Structured logging with `tracing`.
//!
//! Library crates only emit events; the binary calls [`init_subscriber`]
//! once to route them to stderr, keeping stdout free for JSON output.

use tracing_subscriber::EnvFilter;

/// Install the global stderr subscriber.
///
/// `level` is any `EnvFilter` directive (`"warn"`, `"periop_risk=debug"`).
/// A set `RUST_LOG` overrides it. Only the first call installs anything.
pub fn init_subscriber(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();

    if installed.is_ok() {
        tracing::debug!(level, "logging initialized");
    }
}
