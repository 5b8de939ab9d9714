//! Registration and login orchestration.
//!
//! `AuthService` is constructed once at process start from `Settings` and
//! passed by reference into handlers; there are no ambient globals. Login
//! failures are reported with one generic error regardless of cause (unknown
//! email, wrong password, or lockout), and unknown emails still pay for a
//! full hash verification so timing does not reveal account existence.

use diesel::SqliteConnection;

use trove_core::config::{PasswordPolicyConfig, Settings};
use trove_core::constants::MAX_NAME_LENGTH;
use trove_core::util::ident::new_record_id;
use trove_db::error::DbError;
use trove_db::model::account::{Account, NewAccount};
use trove_db::store::credential;

use crate::error::{ServiceError, ServiceResult};

use super::lockout::LockoutPolicy;
use super::password;
use super::session::{SessionContext, SessionGrant};
use super::validate;

/// Registration request fields.
#[derive(Debug, Clone, Copy)]
pub struct RegisterInput<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub password: &'a str,
}

pub struct AuthService {
    lockout: LockoutPolicy,
    approved_email_domain: Option<String>,
    password_policy: PasswordPolicyConfig,
}

impl AuthService {
    #[must_use]
    pub const fn new(
        lockout: LockoutPolicy,
        approved_email_domain: Option<String>,
        password_policy: PasswordPolicyConfig,
    ) -> Self {
        Self {
            lockout,
            approved_email_domain,
            password_policy,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            LockoutPolicy::from_settings(settings),
            settings.auth.approved_email_domain.clone(),
            settings.auth.password.clone(),
        )
    }

    /// ## Summary
    /// Registers a new account: validates every field, generates the id,
    /// hashes the password, and inserts. New accounts are never admins.
    ///
    /// ## Errors
    /// - `ValidationError` for malformed or denylisted input.
    /// - `DuplicateEmail` when the email is taken; its user-facing message is
    ///   generic so registration cannot be used to enumerate accounts.
    #[tracing::instrument(skip(self, conn, input))]
    pub fn register(
        &self,
        conn: &mut SqliteConnection,
        input: &RegisterInput<'_>,
    ) -> ServiceResult<Account> {
        validate::validate_email(input.email, self.approved_email_domain.as_deref())?;
        validate::validate_password_strength(input.password, &self.password_policy)?;
        validate::validate_free_text("First name", input.first_name, MAX_NAME_LENGTH)?;
        validate::validate_free_text("Last name", input.last_name, MAX_NAME_LENGTH)?;

        let id = new_record_id();
        let password_hash = password::hash_password(input.password)?;

        let new_account = NewAccount {
            id: &id,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash: &password_hash,
            is_admin: false,
        };

        let account = credential::create(conn, &new_account).map_err(|err| match err {
            DbError::DuplicateEmail => {
                tracing::debug!("Registration rejected: email already in use");
                ServiceError::DuplicateEmail
            }
            other => ServiceError::DatabaseError(other),
        })?;

        tracing::info!(account_id = %account.id, "Account registered");

        Ok(account)
    }

    /// ## Summary
    /// Authenticates an account and issues a session grant.
    ///
    /// Failure handling, in order:
    /// 1. Unknown email: verify against the decoy hash first so the attempt
    ///    costs as much as a real one, then fail generically.
    /// 2. Locked account: bump the (bounded) counter and fail with the same
    ///    generic error as a wrong password.
    /// 3. Wrong password: bump the counter and fail generically.
    /// 4. Success: reset the counter and issue the grant.
    ///
    /// ## Errors
    /// `AuthenticationFailed` for every credential failure; database errors
    /// pass through.
    #[tracing::instrument(skip(self, conn, email, login_password))]
    pub fn login(
        &self,
        conn: &mut SqliteConnection,
        email: &str,
        login_password: &str,
    ) -> ServiceResult<SessionGrant> {
        let Some(account) = credential::find_by_email(conn, email)? else {
            let _ = password::verify_password(login_password, password::DECOY_HASH);
            tracing::debug!("Login failed: unknown email");
            return Err(ServiceError::AuthenticationFailed);
        };

        if self.lockout.is_locked(&account) {
            credential::increment_failed_logins(conn, &account.id)?;
            tracing::debug!(account_id = %account.id, "Login rejected: account locked");
            return Err(ServiceError::AuthenticationFailed);
        }

        if !password::verify_password(login_password, &account.password_hash)? {
            credential::increment_failed_logins(conn, &account.id)?;
            tracing::debug!(account_id = %account.id, "Login failed: wrong password");
            return Err(ServiceError::AuthenticationFailed);
        }

        credential::reset_failed_logins(conn, &account.id)?;
        tracing::info!(account_id = %account.id, "Login succeeded");

        Ok(SessionGrant::for_account(&account))
    }

    /// ## Summary
    /// Invalidates the session binding. Idempotent: logging out twice is not
    /// an error.
    pub fn logout(ctx: &mut SessionContext) {
        if ctx.is_authenticated() {
            tracing::debug!("Session cleared");
        }
        ctx.clear();
    }
}
