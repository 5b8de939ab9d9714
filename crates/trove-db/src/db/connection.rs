use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::db::DbProvider;
use crate::error::{DbError, DbResult};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Pragmas applied on every checkout. SQLite ships with foreign keys off; the
/// busy timeout makes concurrent writers queue instead of failing immediately.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA busy_timeout = 5000; \
             PRAGMA foreign_keys = ON; \
             PRAGMA journal_mode = WAL; \
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// ## Summary
/// Creates a new database connection pool.
///
/// ## Errors
/// Returns a `PoolError` if the pool cannot be constructed with the provided
/// database URL.
#[tracing::instrument(skip(database_url), fields(pool_size = size))]
pub fn create_pool(database_url: &str, size: u32) -> Result<DbPool, PoolError> {
    tracing::debug!("Creating database connection pool");

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let pool = Pool::builder()
        .max_size(size)
        .connection_customizer(Box::new(SqlitePragmas))
        .test_on_check_out(false)
        .build(manager)?;

    tracing::info!(pool_size = size, "Database connection pool created");

    Ok(pool)
}

/// ## Summary
/// Applies any pending embedded migrations.
///
/// ## Errors
/// Returns a `MigrationError` if a migration fails to apply.
pub fn run_migrations(conn: &mut SqliteConnection) -> DbResult<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| DbError::MigrationError(err.to_string()))?;

    if !applied.is_empty() {
        tracing::info!(count = applied.len(), "Applied pending migrations");
    }

    Ok(())
}

impl DbProvider for DbPool {
    fn get_connection(&self) -> DbResult<DbConnection> {
        Ok(self.get()?)
    }
}
