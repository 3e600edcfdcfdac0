use anyhow::{Context, Result};

/// Initialize logging to standard error.
///
/// Warnings are always shown, every `verbose` level adds a more detailed
/// level. `RUST_LOG` takes precedence.
pub fn init_logging(verbose: u8) -> Result<()> {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init()
        .context("Cannot initialize logging")
}
