//! Asset operations, each gated by the authorization rules before the store
//! is touched.

use diesel::SqliteConnection;

use trove_core::constants::{MAX_ASSET_DESCRIPTION_LENGTH, MAX_ASSET_NAME_LENGTH};
use trove_core::util::ident::new_record_id;
use trove_db::model::account::Account;
use trove_db::model::asset::{Asset, AssetChanges, NewAsset};
use trove_db::store::asset as asset_store;

use crate::auth::authorize::{self, AssetScope};
use crate::auth::validate;
use crate::error::{ServiceError, ServiceResult};

/// Name and description fields for create and edit.
#[derive(Debug, Clone, Copy)]
pub struct AssetInput<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

fn validate_input(input: &AssetInput<'_>) -> ServiceResult<()> {
    validate::validate_free_text("Asset name", input.name, MAX_ASSET_NAME_LENGTH)?;
    validate::validate_free_text(
        "Asset description",
        input.description,
        MAX_ASSET_DESCRIPTION_LENGTH,
    )
}

/// The uniform denial for a missing or invisible asset: admins have full
/// visibility and learn `NotFound`, everyone else learns nothing.
fn not_visible(actor: &Account, asset_id: &str) -> ServiceError {
    if actor.is_admin {
        ServiceError::NotFound(format!("Asset {asset_id} not found"))
    } else {
        ServiceError::AccessDenied
    }
}

/// ## Summary
/// Creates an asset owned by the actor. Any authenticated account may create
/// assets for itself; ownership is fixed at creation.
///
/// ## Errors
/// `ValidationError` for malformed fields; database errors pass through.
#[tracing::instrument(skip(conn, actor, input), fields(actor_id = %actor.id))]
pub fn create_asset(
    conn: &mut SqliteConnection,
    actor: &Account,
    input: &AssetInput<'_>,
) -> ServiceResult<Asset> {
    validate_input(input)?;

    let id = new_record_id();
    let new_asset = NewAsset {
        id: &id,
        owner_id: &actor.id,
        name: input.name,
        description: input.description,
    };

    let asset = asset_store::create(conn, &new_asset)?;
    tracing::info!(asset_id = %asset.id, "Asset created");

    Ok(asset)
}

/// ## Summary
/// Fetches a single asset the actor may see (owner or admin).
///
/// ## Errors
/// `AccessDenied` for invisible or absent assets (non-admin actors);
/// `NotFound` for admins.
#[tracing::instrument(skip(conn, actor), fields(actor_id = %actor.id))]
pub fn get_asset(
    conn: &mut SqliteConnection,
    actor: &Account,
    asset_id: &str,
) -> ServiceResult<Asset> {
    let Some(asset) = asset_store::find_by_id(conn, asset_id)? else {
        return Err(not_visible(actor, asset_id));
    };

    authorize::can_view_asset(actor, &asset).require()?;

    Ok(asset)
}

/// ## Summary
/// Lists assets in the actor's visible scope: everything for admins,
/// otherwise only the actor's own.
///
/// ## Errors
/// Returns database errors from the listing query.
#[tracing::instrument(skip(conn, actor), fields(actor_id = %actor.id))]
pub fn list_assets(conn: &mut SqliteConnection, actor: &Account) -> ServiceResult<Vec<Asset>> {
    match authorize::asset_listing_scope(actor) {
        AssetScope::All => Ok(asset_store::list_all(conn)?),
        AssetScope::OwnedBy(owner_id) => Ok(asset_store::list_by_owner(conn, &owner_id)?),
    }
}

/// ## Summary
/// Replaces an asset's name and description. Edit is ownership-only: even
/// admins may not edit assets they do not own.
///
/// ## Errors
/// - `ValidationError` for malformed fields.
/// - `AccessDenied` when the actor is not the owner (a visible-but-not-owned
///   asset is denied, not hidden).
/// - `NotFound` for admins editing a missing asset.
#[tracing::instrument(skip(conn, actor, input), fields(actor_id = %actor.id))]
pub fn edit_asset(
    conn: &mut SqliteConnection,
    actor: &Account,
    asset_id: &str,
    input: &AssetInput<'_>,
) -> ServiceResult<Asset> {
    validate_input(input)?;

    let Some(asset) = asset_store::find_by_id(conn, asset_id)? else {
        return Err(not_visible(actor, asset_id));
    };

    authorize::can_edit_asset(actor, &asset).require()?;

    let changes = AssetChanges {
        name: input.name,
        description: input.description,
        updated_at: chrono::Utc::now().naive_utc(),
    };

    let updated = asset_store::update(conn, asset_id, &changes)?;
    tracing::info!(asset_id, "Asset updated");

    Ok(updated)
}

/// ## Summary
/// Deletes an asset. Delete is role-only: the admin gate runs before the
/// record is even looked up, so non-admins learn nothing about existence.
///
/// ## Errors
/// - `AccessDenied` when the actor is not an admin.
/// - `NotFound` when the asset does not exist.
#[tracing::instrument(skip(conn, actor), fields(actor_id = %actor.id))]
pub fn delete_asset(
    conn: &mut SqliteConnection,
    actor: &Account,
    asset_id: &str,
) -> ServiceResult<()> {
    authorize::can_delete_asset(actor).require()?;

    let rows = asset_store::delete(conn, asset_id)?;
    if rows == 0 {
        return Err(ServiceError::NotFound(format!(
            "Asset {asset_id} not found"
        )));
    }

    tracing::info!(asset_id, "Asset deleted by administrator");

    Ok(())
}
