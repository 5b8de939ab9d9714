use thiserror::Error;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    PoolError(#[from] diesel::r2d2::PoolError),

    #[error("Migration error: {0}")]
    MigrationError(String),

    /// An insert lost the race for an email address. Callers must translate
    /// this into a generic user-facing failure.
    #[error("Email address is already registered")]
    DuplicateEmail,
}

pub type DbResult<T> = std::result::Result<T, DbError>;
