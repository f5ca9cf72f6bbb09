use anyhow::{anyhow, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Pick the default filter: the configured level, raised by -v flags
pub fn default_filter(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global tracing subscriber.
///
/// The terminal belongs to the TUI, so events go to `log_path` (appended,
/// no ANSI colors). With no path, or a log file that cannot be opened,
/// events are discarded. `RUST_LOG` takes precedence over the configured
/// level.
pub fn init_tracing(log_path: Option<&Path>, configured: &str, verbose: u8) -> Result<()> {
    let default_level = default_filter(configured, verbose);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log level {:?}: {}", default_level, e))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false);

    let file = log_path.and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!(
                    "Warning: could not open log file {}: {}; logging disabled",
                    path.display(),
                    e
                );
                None
            }
        }
    });

    let init_result = match file {
        Some(file) => builder.with_writer(Mutex::new(file)).try_init(),
        None => builder.with_writer(std::io::sink).try_init(),
    };

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
