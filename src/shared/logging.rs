//! Structured logging for the storefront client
//!
//! Every event carries an `operation` field so navigation and store lookups
//! can be filtered independently.

use crate::domain::CurrentLocation;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Navigation,
    StoreLookup,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Navigation => "navigation",
            LogOperation::StoreLookup => "store_lookup",
        }
    }
}

/// Install the fmt subscriber. `RUST_LOG` overrides the `info` default.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();
}

/// Log the outcome of matching the location against the nav table
pub fn log_nav_resolved(location: &CurrentLocation, active_label: Option<&str>) {
    tracing::trace!(
        operation = LogOperation::Navigation.as_str(),
        path = %location.path,
        query = %location.query,
        active = active_label.unwrap_or("<none>"),
        "Resolved navigation links"
    );
}

/// Log a store read outside of any provider
pub fn log_missing_store(store_type: &str) {
    tracing::error!(
        operation = LogOperation::StoreLookup.as_str(),
        store = store_type,
        "Store accessed outside of its provider"
    );
}
