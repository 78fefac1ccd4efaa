//! Seed script - ensures every default seed issue exists
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only outcome lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SeedConfig::from_env();
    let db = Database::connect(&config.database_url).await?;

    tracing::info!("Connected to database");

    run(&Seeder::new(db), &mut std::io::stdout().lock()).await?;

    Ok(())
}
