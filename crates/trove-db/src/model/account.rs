use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// A registered identity. The credential store is the only writer; services
/// mutate accounts exclusively through its operations.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Identifiable, Queryable, Selectable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::account)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Account {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2 PHC string. Skipped when serializing so it never reaches a
    /// response body or log sink.
    #[serde(skip)]
    pub password_hash: String,
    pub is_admin: bool,
    pub failed_login_count: i32,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Insertable)]
#[diesel(table_name = schema::account)]
pub struct NewAccount<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub password_hash: &'a str,
    pub is_admin: bool,
}
