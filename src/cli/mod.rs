//! CLI commands
//!
//! Command implementation and terminal plumbing for the `jj-bookmark-sync`
//! binary.

mod progress;
mod prompt;
pub mod style;
mod sync;

pub use sync::run_sync;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr log subscriber
///
/// `RUST_LOG` always applies; `--verbose` adds DEBUG, otherwise WARN.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
