//! Credential store: the single owner of account records.
//!
//! Every mutation is one atomic SQL statement, so concurrent logins or
//! registrations against the same record cannot observe partial state. The
//! UNIQUE constraint on `email` arbitrates racing creates.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use trove_core::constants::FAILED_LOGIN_COUNT_CAP;

use crate::db::schema;
use crate::error::{DbError, DbResult};
use crate::model::account::{Account, NewAccount};

/// ## Summary
/// Atomic check-and-insert of a new account. When two callers race on the
/// same email, exactly one insert wins; the other observes `DuplicateEmail`.
///
/// ## Errors
/// Returns `DuplicateEmail` if the email is already registered, or a database
/// error for any other failure.
pub fn create(conn: &mut SqliteConnection, new_account: &NewAccount<'_>) -> DbResult<Account> {
    diesel::insert_into(schema::account::table)
        .values(new_account)
        .returning(Account::as_select())
        .get_result(conn)
        .map_err(|err| match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                DbError::DuplicateEmail
            }
            other => DbError::DatabaseError(other),
        })
}

/// ## Errors
/// Returns a database error if the query fails.
pub fn find_by_email(conn: &mut SqliteConnection, email: &str) -> DbResult<Option<Account>> {
    Ok(schema::account::table
        .filter(schema::account::email.eq(email))
        .select(Account::as_select())
        .first(conn)
        .optional()?)
}

/// ## Errors
/// Returns a database error if the query fails.
pub fn find_by_id(conn: &mut SqliteConnection, account_id: &str) -> DbResult<Option<Account>> {
    Ok(schema::account::table
        .find(account_id)
        .select(Account::as_select())
        .first(conn)
        .optional()?)
}

/// ## Summary
/// Atomically bumps the failed-login counter, saturating at
/// `FAILED_LOGIN_COUNT_CAP` so the column can never overflow.
///
/// ## Errors
/// Returns a database error if the update fails.
pub fn increment_failed_logins(conn: &mut SqliteConnection, account_id: &str) -> DbResult<usize> {
    Ok(diesel::update(
        schema::account::table
            .find(account_id)
            .filter(schema::account::failed_login_count.lt(FAILED_LOGIN_COUNT_CAP)),
    )
    .set(schema::account::failed_login_count.eq(schema::account::failed_login_count + 1))
    .execute(conn)?)
}

/// ## Summary
/// Atomically resets the failed-login counter to zero. Returns the number of
/// affected rows so callers can detect a missing account.
///
/// ## Errors
/// Returns a database error if the update fails.
pub fn reset_failed_logins(conn: &mut SqliteConnection, account_id: &str) -> DbResult<usize> {
    Ok(diesel::update(schema::account::table.find(account_id))
        .set(schema::account::failed_login_count.eq(0))
        .execute(conn)?)
}

/// ## Summary
/// Sets the admin role flag. Reachable only from privileged operations; there
/// is no self-service path to this mutation.
///
/// ## Errors
/// Returns a database error if the update fails.
pub fn set_role(conn: &mut SqliteConnection, account_id: &str, is_admin: bool) -> DbResult<usize> {
    Ok(diesel::update(schema::account::table.find(account_id))
        .set(schema::account::is_admin.eq(is_admin))
        .execute(conn)?)
}
