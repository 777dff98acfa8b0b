//! Subscriber setup for the engine's log targets.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV: &str = "PILLARS_LOG";

/// Directives used when `PILLARS_LOG` is unset or unparsable. Pattern rule
/// outcomes are logged at `debug`, so that target stays at `warn` unless
/// asked for.
pub const DEFAULT_DIRECTIVES: &str =
    "pillars_core=info,pillars_analysis=info,pillars_analysis::pattern=warn";

static INIT: Once = Once::new();

/// Filter built from `directives`, or [`DEFAULT_DIRECTIVES`] when they are
/// absent or invalid.
pub fn engine_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install a fmt subscriber filtered by `PILLARS_LOG`, e.g.
/// `PILLARS_LOG=pillars_analysis::pattern=debug`.
///
/// Only the first call does anything, and a subscriber the host already
/// installed is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV).ok();
        let _ = tracing_subscriber::registry()
            // Batch analysis runs on rayon workers.
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(engine_filter(directives.as_deref()))
            .try_init();
    });
}
