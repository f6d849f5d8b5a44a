//! stderr logging for fsift; stdout carries only the result list.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "fsift=warn";

/// Install the global subscriber.
///
/// With `level` set (e.g. `"debug"` from `--verbose`) every fsift crate logs
/// at that level and `RUST_LOG` is ignored; otherwise `RUST_LOG` decides,
/// falling back to warnings only.
pub fn init(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(format!("fsift={level}")),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
