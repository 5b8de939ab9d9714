//! Business logic for the Trove asset registry: registration and login
//! orchestration, lockout, session identity, and the authorization rules
//! gating every account and asset operation.

pub mod account;
pub mod asset;
pub mod auth;
pub mod error;
