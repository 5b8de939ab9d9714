use crate::error::DbResult;

pub mod connection;
pub mod schema;

/// Source of pooled database connections, so services can be handed a pool
/// handle rather than reaching for ambient globals.
pub trait DbProvider: Send + Sync {
    /// ## Errors
    /// Returns a pool error if no connection can be checked out.
    fn get_connection(&self) -> DbResult<connection::DbConnection>;
}
