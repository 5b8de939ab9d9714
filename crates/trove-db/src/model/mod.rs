pub mod account;
pub mod asset;
