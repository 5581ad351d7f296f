//! # Storehouse Server
//!
//! Opens the configured database, verifies it answers, and shuts down.
//!
//! ## Usage
//! ```bash
//! DATABASE_URL=mysql://root@localhost:3306/storage \
//!     cargo run -p storehouse-db --bin server
//! ```

use storehouse_db::{Database, ServerConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = ServerConfig::load()?;
    info!(
        db_url = %config.redacted_url(),
        max_connections = config.max_connections,
        "Configuration loaded"
    );

    let db = Database::new(config.db_config()).await?;

    if db.health_check().await {
        info!("Database configured");
    } else {
        warn!("Database did not answer ping");
    }

    db.close().await;
    Ok(())
}
