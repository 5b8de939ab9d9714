//! Ownership and role authorization rules.
//!
//! Every rule is an explicit decision function over the records it is handed;
//! the guard holds no state and touches no store. Denials map to a uniform
//! `AccessDenied` so callers cannot tell "hidden" apart from "absent".
//!
//! The rules are intentionally asymmetric for assets: the exact owner edits
//! (the admin flag grants nothing there), while delete is role-only and
//! owners without the admin role cannot delete their own assets. This mirrors
//! the product policy and must not be "fixed" here.

use trove_db::model::account::Account;
use trove_db::model::asset::Asset;

use crate::error::{ServiceError, ServiceResult};

/// Result of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthzResult {
    /// Access is allowed.
    Allowed,
    /// Access is denied.
    Denied,
}

impl AuthzResult {
    /// Returns `true` if access is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Convert to a `Result`, returning `Err(ServiceError::AccessDenied)` if denied.
    ///
    /// ## Errors
    /// Returns `AccessDenied` if access is denied.
    pub fn require(self) -> ServiceResult<()> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied => Err(ServiceError::AccessDenied),
        }
    }

    const fn allowed_if(condition: bool) -> Self {
        if condition { Self::Allowed } else { Self::Denied }
    }
}

/// The set of assets an actor may see: everything for admins, otherwise only
/// their own. A scope rather than a boolean, because the visible set differs
/// by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetScope {
    All,
    OwnedBy(String),
}

/// An account is visible to itself and to admins.
#[must_use]
pub fn can_view_account(actor: &Account, account: &Account) -> AuthzResult {
    AuthzResult::allowed_if(actor.id == account.id || actor.is_admin)
}

/// Listing scope for the actor's role.
#[must_use]
pub fn asset_listing_scope(actor: &Account) -> AssetScope {
    if actor.is_admin {
        AssetScope::All
    } else {
        AssetScope::OwnedBy(actor.id.clone())
    }
}

/// An asset is visible to its owner and to admins, matching the listing scope.
#[must_use]
pub fn can_view_asset(actor: &Account, asset: &Asset) -> AuthzResult {
    AuthzResult::allowed_if(actor.id == asset.owner_id || actor.is_admin)
}

/// Edit is ownership-only: the exact owner may edit, and the admin flag
/// grants nothing here.
#[must_use]
pub fn can_edit_asset(actor: &Account, asset: &Asset) -> AuthzResult {
    AuthzResult::allowed_if(actor.id == asset.owner_id)
}

/// Delete is role-only: admins may delete any asset, owners may not delete
/// their own.
#[must_use]
pub fn can_delete_asset(actor: &Account) -> AuthzResult {
    AuthzResult::allowed_if(actor.is_admin)
}

/// Only admins release a lockout.
#[must_use]
pub fn can_reset_lockout(actor: &Account) -> AuthzResult {
    AuthzResult::allowed_if(actor.is_admin)
}

/// Only admins change role flags; registration never reaches this.
#[must_use]
pub fn can_set_role(actor: &Account) -> AuthzResult {
    AuthzResult::allowed_if(actor.is_admin)
}
