//! Logging setup.
//!
//! Logs go to stderr so stdout carries only the calculator output.
//! `RUST_LOG` takes precedence over the configured level:
//! ```bash
//! RUST_LOG=visioncalc=debug visioncalc --keys "5+3="
//! ```

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Initialize logging. Only the first call takes effect.
///
/// `verbose` raises the level to `debug` unless `RUST_LOG` is set.
pub fn init(config: &LoggingConfig, verbose: bool) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
