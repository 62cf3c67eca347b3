//! Tracing subscriber setup for embedders.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber with `EnvFilter`.
///
/// Defaults to info level for the Leafline crates if `RUST_LOG` is not set.
/// Safe to call once per process; embedding applications that install their
/// own subscriber should skip this.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "leafline_storefront=info,leafline_core=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
