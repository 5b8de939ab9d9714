//! Shared foundation for the Trove asset registry: configuration, constants,
//! the core error type, and small utilities with minimal dependencies.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod util;
