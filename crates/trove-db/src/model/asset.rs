use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::schema;
use crate::model::account::Account;

/// An owned record. `owner_id` is immutable after creation; the foreign key
/// keeps assets from outliving their owner.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Identifiable,
    Queryable,
    Selectable,
    Associations,
    Serialize,
    Deserialize,
)]
#[diesel(table_name = schema::asset)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(Account, foreign_key = owner_id))]
pub struct Asset {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Insertable)]
#[diesel(table_name = schema::asset)]
pub struct NewAsset<'a> {
    pub id: &'a str,
    pub owner_id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
}

/// Field updates applied by the edit operation. Ownership never changes.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = schema::asset)]
pub struct AssetChanges<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub updated_at: chrono::NaiveDateTime,
}
