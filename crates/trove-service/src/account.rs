//! Account viewing and administrative operations.
//!
//! Visibility rule: a non-admin actor gets the same `AccessDenied` whether
//! the target account is someone else's or does not exist, so probing ids
//! reveals nothing. `NotFound` only surfaces to actors with visibility.

use diesel::SqliteConnection;

use trove_db::model::account::Account;
use trove_db::store::credential;

use crate::auth::authorize;
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Fetches an account for viewing, gated by the self-or-admin rule.
///
/// ## Errors
/// - `AccessDenied` when the actor may not see the target (or it is absent
///   and the actor is not an admin).
/// - `NotFound` when an admin requests a missing account.
#[tracing::instrument(skip(conn, actor), fields(actor_id = %actor.id))]
pub fn view_account(
    conn: &mut SqliteConnection,
    actor: &Account,
    account_id: &str,
) -> ServiceResult<Account> {
    let Some(account) = credential::find_by_id(conn, account_id)? else {
        if actor.is_admin {
            return Err(ServiceError::NotFound(format!(
                "Account {account_id} not found"
            )));
        }
        return Err(ServiceError::AccessDenied);
    };

    authorize::can_view_account(actor, &account).require()?;

    Ok(account)
}

/// ## Summary
/// Administrative release of a lockout: resets the failed-login counter so
/// the account transitions back to `Open`.
///
/// ## Errors
/// - `AccessDenied` when the actor is not an admin (checked before existence
///   is revealed).
/// - `NotFound` when the target account does not exist.
#[tracing::instrument(skip(conn, actor), fields(actor_id = %actor.id))]
pub fn reset_lockout(
    conn: &mut SqliteConnection,
    actor: &Account,
    account_id: &str,
) -> ServiceResult<()> {
    authorize::can_reset_lockout(actor).require()?;

    let rows = credential::reset_failed_logins(conn, account_id)?;
    if rows == 0 {
        return Err(ServiceError::NotFound(format!(
            "Account {account_id} not found"
        )));
    }

    tracing::info!(account_id, "Lockout reset by administrator");

    Ok(())
}

/// ## Summary
/// Administrative role change. There is deliberately no self-service path to
/// this operation.
///
/// ## Errors
/// - `AccessDenied` when the actor is not an admin.
/// - `NotFound` when the target account does not exist.
#[tracing::instrument(skip(conn, actor), fields(actor_id = %actor.id))]
pub fn set_role(
    conn: &mut SqliteConnection,
    actor: &Account,
    account_id: &str,
    is_admin: bool,
) -> ServiceResult<()> {
    authorize::can_set_role(actor).require()?;

    let rows = credential::set_role(conn, account_id, is_admin)?;
    if rows == 0 {
        return Err(ServiceError::NotFound(format!(
            "Account {account_id} not found"
        )));
    }

    tracing::info!(account_id, is_admin, "Role updated by administrator");

    Ok(())
}
