//! Persistence layer: diesel schema, record models, and the credential and
//! asset stores. All business rules live above this crate; the stores expose
//! plain atomic operations with storage-level uniqueness as a backstop.

pub mod db;
pub mod error;
pub mod model;
pub mod store;
