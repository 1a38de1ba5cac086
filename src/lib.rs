pub mod config;
pub mod dates;
pub mod export; // CSV + export files
pub mod models;
pub mod report; // PDF reports
pub mod store; // Entry store + draft
pub mod trends; // Period aggregation

pub use config::{ReportConfig, StorePaths};
pub use models::{Category, SeverityField, SymptomEntry, TextField};
pub use store::{EntryStore, LoadOutcome, StoreError};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber for a host application.
/// Filter comes from `RUST_LOG`, falling back to the crate default.
/// Calling it again once a subscriber exists is a no-op.
pub fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();

    if result.is_ok() {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
