use thiserror::Error;

/// Service layer errors - combines all error types
///
/// The display strings for `AuthenticationFailed`, `DuplicateEmail`, and
/// `AccessDenied` are deliberately generic: user-visible output must not
/// reveal whether an email is registered, whether a lockout or a wrong
/// password caused a failure, or whether a hidden resource exists.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] trove_db::error::DbError),

    #[error("Invalid email or password")]
    AuthenticationFailed,

    #[error("Unable to register with the supplied details")]
    DuplicateEmail,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Access denied")]
    AccessDenied,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
