//! Logging setup
//!
//! Diagnostics go to stderr so the interactive report on stdout stays clean.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for the requested verbosity; `RUST_LOG` wins when set
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "grocer=debug,warn"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

pub fn init_cli_logger(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
