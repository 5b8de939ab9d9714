//! Input validation for registration and asset fields.
//!
//! Validation failures are the one error class with specific user-facing
//! messages: the caller corrects the input and retries.

use trove_core::config::PasswordPolicyConfig;
use trove_core::constants::{FREE_TEXT_DENYLIST, MAX_EMAIL_LENGTH};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Checks that `email` is syntactically plausible and, when a policy domain is
/// configured, that it belongs to that domain.
///
/// The syntactic check is deliberately structural (single `@`, non-empty
/// local part, dotted domain, no whitespace, control, or denylisted
/// characters); full RFC address grammar is not the goal here. The denylist
/// applies to the email like every other stored field, so addresses cannot
/// smuggle markup or shell metacharacters into the record.
///
/// ## Errors
/// Returns `ValidationError` describing the first failed check.
pub fn validate_email(email: &str, approved_domain: Option<&str>) -> ServiceResult<()> {
    if email.is_empty() {
        return Err(ServiceError::ValidationError(
            "Email address is required".to_string(),
        ));
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(ServiceError::ValidationError(format!(
            "Email address must be at most {MAX_EMAIL_LENGTH} characters"
        )));
    }
    if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ServiceError::ValidationError(
            "Email address must not contain whitespace".to_string(),
        ));
    }
    if email.chars().any(|c| FREE_TEXT_DENYLIST.contains(&c)) {
        return Err(ServiceError::ValidationError(
            "Email address contains characters that are not allowed".to_string(),
        ));
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => {
            return Err(ServiceError::ValidationError(
                "Email address must contain exactly one '@'".to_string(),
            ));
        }
    };

    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ServiceError::ValidationError(
            "Email address is not valid".to_string(),
        ));
    }

    if let Some(approved) = approved_domain
        && domain != approved
    {
        return Err(ServiceError::ValidationError(format!(
            "Email address must be under the {approved} domain"
        )));
    }

    Ok(())
}

/// ## Summary
/// Checks the password against the configured strength policy: minimum
/// length plus required character classes.
///
/// ## Errors
/// Returns `ValidationError` naming the first unmet requirement.
pub fn validate_password_strength(
    password: &str,
    policy: &PasswordPolicyConfig,
) -> ServiceResult<()> {
    if password.len() < policy.min_length {
        return Err(ServiceError::ValidationError(format!(
            "Password must be at least {} characters long",
            policy.min_length
        )));
    }
    if policy.require_uppercase && !password.chars().any(char::is_uppercase) {
        return Err(ServiceError::ValidationError(
            "Password must contain at least one uppercase letter".to_string(),
        ));
    }
    if policy.require_lowercase && !password.chars().any(char::is_lowercase) {
        return Err(ServiceError::ValidationError(
            "Password must contain at least one lowercase letter".to_string(),
        ));
    }
    if policy.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ServiceError::ValidationError(
            "Password must contain at least one digit".to_string(),
        ));
    }
    if policy.require_special && password.chars().all(char::is_alphanumeric) {
        return Err(ServiceError::ValidationError(
            "Password must contain at least one special character".to_string(),
        ));
    }

    Ok(())
}

/// ## Summary
/// Checks a free-text field: required non-empty, bounded length (counted in
/// characters, matching the storage column widths), and free of the
/// denylisted character set that downstream consumers must never see.
///
/// ## Errors
/// Returns `ValidationError` naming the field and the failed check.
pub fn validate_free_text(field: &str, value: &str, max_length: usize) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::ValidationError(format!(
            "{field} is required"
        )));
    }
    if value.chars().count() > max_length {
        return Err(ServiceError::ValidationError(format!(
            "{field} must be at most {max_length} characters"
        )));
    }
    if value.chars().any(|c| FREE_TEXT_DENYLIST.contains(&c)) {
        return Err(ServiceError::ValidationError(format!(
            "{field} contains characters that are not allowed"
        )));
    }

    Ok(())
}
