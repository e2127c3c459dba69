//! Structured logging setup for binaries.
//!
//! `RUST_LOG` wins when set; otherwise `beosin=info`, or `beosin=debug`
//! when debug output was requested.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. Safe to call more than once.
pub fn init(debug: bool) {
    let default_filter = if debug { "beosin=debug" } else { "beosin=info" };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
