//! Integration test crate. All tests live under `tests/`; this library
//! intentionally exports nothing.
