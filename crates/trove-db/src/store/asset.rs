//! Asset store: plain CRUD over asset records.
//!
//! No business rules here; authorization happens in the service layer before
//! any of these operations run.

use diesel::prelude::*;

use crate::db::schema;
use crate::error::DbResult;
use crate::model::asset::{Asset, AssetChanges, NewAsset};

/// ## Errors
/// Returns a database error if the insert fails (including a missing owner,
/// rejected by the foreign key).
pub fn create(conn: &mut SqliteConnection, new_asset: &NewAsset<'_>) -> DbResult<Asset> {
    Ok(diesel::insert_into(schema::asset::table)
        .values(new_asset)
        .returning(Asset::as_select())
        .get_result(conn)?)
}

/// ## Errors
/// Returns a database error if the query fails.
pub fn find_by_id(conn: &mut SqliteConnection, asset_id: &str) -> DbResult<Option<Asset>> {
    Ok(schema::asset::table
        .find(asset_id)
        .select(Asset::as_select())
        .first(conn)
        .optional()?)
}

/// ## Summary
/// Replaces name and description in one atomic statement. Ownership is not
/// part of the changeset and cannot be altered here.
///
/// ## Errors
/// Returns a database error if the update fails.
pub fn update(
    conn: &mut SqliteConnection,
    asset_id: &str,
    changes: &AssetChanges<'_>,
) -> DbResult<Asset> {
    Ok(diesel::update(schema::asset::table.find(asset_id))
        .set(changes)
        .returning(Asset::as_select())
        .get_result(conn)?)
}

/// ## Summary
/// Deletes an asset, returning the number of affected rows so callers can
/// distinguish a missing record.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub fn delete(conn: &mut SqliteConnection, asset_id: &str) -> DbResult<usize> {
    Ok(diesel::delete(schema::asset::table.find(asset_id)).execute(conn)?)
}

/// ## Errors
/// Returns a database error if the query fails.
pub fn list_all(conn: &mut SqliteConnection) -> DbResult<Vec<Asset>> {
    Ok(schema::asset::table
        .order((schema::asset::created_at.asc(), schema::asset::id.asc()))
        .select(Asset::as_select())
        .load(conn)?)
}

/// ## Errors
/// Returns a database error if the query fails.
pub fn list_by_owner(conn: &mut SqliteConnection, owner_id: &str) -> DbResult<Vec<Asset>> {
    Ok(schema::asset::table
        .filter(schema::asset::owner_id.eq(owner_id))
        .order((schema::asset::created_at.asc(), schema::asset::id.asc()))
        .select(Asset::as_select())
        .load(conn)?)
}
