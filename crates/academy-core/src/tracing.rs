use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter applied when `RUST_LOG` is unset. Query logging from the sqlx and
/// sea-orm layers stays at warn.
pub const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

/// JSON lines on stdout, filtered by `RUST_LOG` or [`DEFAULT_FILTER`].
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_current_span(false))
        .try_init()
        .is_ok()
}
