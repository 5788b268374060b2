//! Diagnostic logging.
//!
//! Quiet by default (`warn`), on stderr, so stdout carries only the summary line.
//! `RUST_LOG` overrides the level, e.g. `RUST_LOG=debug` lists every scanned
//! and skipped file. Logging never changes what gets written.

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

pub const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber. Only the first call takes effect.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .with_filter(filter);

        // Another subscriber may already be installed (e.g. by a test harness).
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_repeatable() {
        init();
        init();
        tracing::debug!("still fine");
    }
}
