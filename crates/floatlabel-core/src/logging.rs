use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::runtime::ProgramError;

/// Route `tracing` output to a file, since a running program owns the
/// terminal.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. The file is opened
/// in append mode. Fails if a global subscriber is already installed.
///
/// ```no_run
/// floatlabel_core::log_to_file("form.log").unwrap();
/// tracing::info!("logging to form.log");
/// ```
pub fn log_to_file(path: impl AsRef<Path>) -> Result<(), ProgramError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish()
        .try_init()?;
    Ok(())
}
