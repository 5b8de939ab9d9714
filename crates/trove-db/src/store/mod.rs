pub mod asset;
pub mod credential;
