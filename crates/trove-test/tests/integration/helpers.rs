//! Shared fixtures: a tempdir-backed pooled database plus account seeding.

use anyhow::{Context, Result};
use tempfile::TempDir;

use trove_core::config::PasswordPolicyConfig;
use trove_db::db::DbProvider;
use trove_db::db::connection::{self, DbConnection, DbPool};
use trove_db::model::account::Account;
use trove_db::store::credential;
use trove_service::auth::{AuthService, LockoutPolicy, RegisterInput};

/// Domain accepted by the test registration policy.
pub const TEST_DOMAIN: &str = "approved.example";

/// A password satisfying the default strength policy.
pub const TEST_PASSWORD: &str = "Aa1!aaaa";

pub const LOCKOUT_THRESHOLD: u32 = 5;

pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("trove.db");
        let url = path.to_str().context("Database path is not valid UTF-8")?;

        let pool = connection::create_pool(url, 4)?;
        let mut conn = pool.get()?;
        connection::run_migrations(&mut conn)?;

        Ok(Self { pool, _dir: dir })
    }

    /// Checks out a connection through the same `DbProvider` seam services
    /// are handed in production.
    pub fn conn(&self) -> DbConnection {
        self.provider()
            .get_connection()
            .expect("Failed to check out connection")
    }

    pub fn provider(&self) -> &dyn DbProvider {
        &self.pool
    }
}

/// An `AuthService` mirroring the default production policy, with the test
/// domain approved.
pub fn auth_service() -> AuthService {
    AuthService::new(
        LockoutPolicy::new(LOCKOUT_THRESHOLD),
        Some(TEST_DOMAIN.to_string()),
        PasswordPolicyConfig::default(),
    )
}

/// Registers an account under the test domain with the standard password.
pub fn register(db: &TestDb, service: &AuthService, local_part: &str) -> Account {
    let email = format!("{local_part}@{TEST_DOMAIN}");
    let mut conn = db.conn();
    service
        .register(
            &mut conn,
            &RegisterInput {
                email: &email,
                first_name: "Test",
                last_name: "Account",
                password: TEST_PASSWORD,
            },
        )
        .expect("Registration failed")
}

/// Grants the admin role out-of-band and returns the refreshed account.
pub fn promote_to_admin(db: &TestDb, account: &Account) -> Account {
    let mut conn = db.conn();
    credential::set_role(&mut conn, &account.id, true).expect("Failed to set role");
    reload(db, &account.id)
}

pub fn reload(db: &TestDb, account_id: &str) -> Account {
    credential::find_by_id(&mut db.conn(), account_id)
        .expect("Query failed")
        .expect("Account missing")
}
