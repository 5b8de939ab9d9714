//! Record identifier generation.
//!
//! ## Summary
//! Account and asset identifiers are random UUIDs rendered as hyphenated
//! strings. 122 random bits make collisions negligible for the lifetime of
//! the system, and generation needs no coordination between callers.

/// Generate a fresh record identifier.
#[must_use]
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Returns `true` if `candidate` has the shape of a record identifier.
#[must_use]
pub fn is_record_id(candidate: &str) -> bool {
    uuid::Uuid::parse_str(candidate).is_ok()
}
