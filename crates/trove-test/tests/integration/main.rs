//! Integration tests: full flows through the service layer against a real
//! pooled SQLite database.

mod helpers;

mod auth_flow;
mod lockout;
mod session;
