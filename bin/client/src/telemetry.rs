//! Tracing and backtrace setup.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

static BACKTRACE: Once = Once::new();

/// Sets `RUST_BACKTRACE=1` unless a value has already been provided.
pub fn enable_backtrace() {
    BACKTRACE.call_once(|| {
        if std::env::var_os("RUST_BACKTRACE").is_none() {
            // SAFETY: called once at startup, before any other thread reads the environment.
            unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
        }
    });
}

/// Maps the `-v` count to the default log level.
pub const fn verbosity_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a fmt subscriber writing to stderr.
///
/// `RUST_LOG` directives take precedence over the level derived from `verbosity`.
pub fn init_tracing_subscriber(verbosity: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(verbosity_level(verbosity)).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
