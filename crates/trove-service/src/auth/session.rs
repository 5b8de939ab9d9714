//! Request-scoped session identity.
//!
//! A `SessionContext` is the binding between one transport-level client
//! context and an account id. It is owned by a single request; storage and
//! expiry of the binding across requests belong to the embedding transport.

use diesel::SqliteConnection;
use serde::{Deserialize, Serialize};

use trove_db::model::account::Account;
use trove_db::store::credential;

use crate::error::{ServiceError, ServiceResult};

/// Proof of a successful login, bound to an account id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionGrant {
    pub account_id: String,
    pub issued_at: chrono::DateTime<chrono::Utc>,
}

impl SessionGrant {
    #[must_use]
    pub fn for_account(account: &Account) -> Self {
        Self {
            account_id: account.id.clone(),
            issued_at: chrono::Utc::now(),
        }
    }
}

/// The identity bound to the current request, or none when unauthenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    account_id: Option<String>,
}

impl SessionContext {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { account_id: None }
    }

    /// Bind this context to the account named by a grant, replacing any
    /// previous binding.
    pub fn establish(&mut self, grant: &SessionGrant) {
        self.account_id = Some(grant.account_id.clone());
    }

    /// Drop the binding. Clearing an already-anonymous context is a no-op,
    /// which makes logout idempotent.
    pub fn clear(&mut self) {
        self.account_id = None;
    }

    #[must_use]
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.account_id.is_some()
    }
}

/// ## Summary
/// Resolves the account bound to the current session, or `None` when the
/// context is anonymous or the binding is stale (account no longer exists).
///
/// ## Errors
/// Returns database errors from the account lookup.
pub fn resolve_current(
    conn: &mut SqliteConnection,
    ctx: &SessionContext,
) -> ServiceResult<Option<Account>> {
    match ctx.account_id() {
        None => Ok(None),
        Some(account_id) => Ok(credential::find_by_id(conn, account_id)?),
    }
}

/// ## Summary
/// Resolves the current account or fails the precondition: operations that
/// require an authenticated identity call this first.
///
/// ## Errors
/// Returns `NotAuthenticated` when no account is bound, or database errors
/// from the lookup.
pub fn require_current(conn: &mut SqliteConnection, ctx: &SessionContext) -> ServiceResult<Account> {
    resolve_current(conn, ctx)?.ok_or(ServiceError::NotAuthenticated)
}
