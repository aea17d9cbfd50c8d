//! Quill host library.
//!
//! Owns everything outside the core interpreter: the long-lived session,
//! command-line configuration, source diagnostics, and the line-oriented
//! driver shared by the REPL, `-e` and file modes of the `quill` binary.

pub mod config;
pub mod driver;
pub mod reporting;
mod session;

pub use config::{ConfigError, Mode, RunConfig};
pub use session::{parse_source, Session, SourceError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=quill_eval=debug` or
/// `RUST_LOG=trace`; nothing is installed when `RUST_LOG` is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
