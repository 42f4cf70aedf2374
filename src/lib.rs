pub mod admin; // User-management screen logic
pub mod client; // Authenticated REST client
pub mod config;
pub mod error;
pub mod models;
pub mod prescriptions; // Draft composer + stock invariant
pub mod rbac; // Role gate
pub mod session;
pub mod validation;

use tracing_subscriber::EnvFilter;

pub use client::ApiClient;
pub use error::ClientError;
pub use models::Role;
pub use session::{CredentialStore, Session, SessionManager};

/// Initialize tracing for the embedding shell. Honors RUST_LOG, falling
/// back to the crate default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
