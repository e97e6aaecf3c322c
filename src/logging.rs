//! Tracing subscriber setup for binaries.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! caller's choice.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr logger
///
/// `RUST_LOG` wins when set. Otherwise `verbose` selects debug output for
/// this crate; the quiet default only shows warnings such as an undo whose
/// order had already left the ledger. Confirmations are the caller's to print.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "order_desk=debug,info"
    } else {
        "order_desk=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (e.g. from several tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
