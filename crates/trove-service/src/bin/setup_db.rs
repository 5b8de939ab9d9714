//! Operator utility: prepare the configured database by creating the
//! connection pool and applying any pending migrations.

use anyhow::Result;

use trove_core::config::load_config;
use trove_core::logging;
use trove_db::db::connection::{create_pool, run_migrations};

fn main() -> Result<()> {
    let config = load_config()?;
    logging::init(&config.logging);

    let pool = create_pool(&config.database.url, config.database.max_connections.into())?;
    let mut conn = pool.get()?;
    run_migrations(&mut conn)?;

    tracing::info!(url = %config.database.url, "Database ready");

    Ok(())
}
