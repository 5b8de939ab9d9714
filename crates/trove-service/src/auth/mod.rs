//! Authentication and authorization flow.
//!
//! ## Module Organization
//!
//! - `authorize`: ownership/role decision table gating every resource operation
//! - `lockout`: brute-force lockout policy over the failed-login counter
//! - `password`: password hashing and verification with Argon2
//! - `service`: registration and login orchestration (`AuthService`)
//! - `session`: request-scoped session identity and logout
//! - `validate`: email, password-strength, and free-text input validation

pub mod authorize;
pub mod lockout;
pub mod password;
pub mod service;
pub mod session;
pub mod validate;

// Re-export commonly used types at module level
pub use authorize::{
    AssetScope, AuthzResult, asset_listing_scope, can_delete_asset, can_edit_asset,
    can_reset_lockout, can_set_role, can_view_account, can_view_asset,
};
pub use lockout::{LockoutPolicy, LockoutState};
pub use service::{AuthService, RegisterInput};
pub use session::{SessionContext, SessionGrant, require_current, resolve_current};
