//! Tracing setup
//!
//! Diagnostics go to stderr so they never interleave with the session's
//! prompts on stdout. `RUST_LOG` overrides the default filter.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default directive when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "expense_ledger=warn";

/// Initializes the global tracing subscriber once per process
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init_tracing();
        super::init_tracing();
        tracing::debug!("tracing initialized twice without panicking");
    }
}
