//! Session lifecycle: establish, resolve, logout, and stale bindings.

use trove_service::auth::{AuthService, SessionContext, require_current, resolve_current};
use trove_service::error::ServiceError;

use super::helpers::{TEST_PASSWORD, TestDb, auth_service, register};

#[test_log::test]
fn login_establishes_resolvable_identity() {
    let db = TestDb::new().expect("Failed to create test database");
    let service = auth_service();
    let alice = register(&db, &service, "alice");

    let grant = service
        .login(&mut db.conn(), &alice.email, TEST_PASSWORD)
        .expect("Login failed");

    let mut ctx = SessionContext::anonymous();
    assert!(
        resolve_current(&mut db.conn(), &ctx)
            .expect("Resolution failed")
            .is_none()
    );

    ctx.establish(&grant);
    let current = require_current(&mut db.conn(), &ctx).expect("Resolution failed");
    assert_eq!(current.id, alice.id);
    assert_eq!(current.email, alice.email);
}

#[test_log::test]
fn logout_is_idempotent_and_drops_identity() {
    let db = TestDb::new().expect("Failed to create test database");
    let service = auth_service();
    let alice = register(&db, &service, "alice");

    let grant = service
        .login(&mut db.conn(), &alice.email, TEST_PASSWORD)
        .expect("Login failed");

    let mut ctx = SessionContext::anonymous();
    ctx.establish(&grant);
    assert!(ctx.is_authenticated());

    AuthService::logout(&mut ctx);
    AuthService::logout(&mut ctx);
    assert!(!ctx.is_authenticated());

    let err = require_current(&mut db.conn(), &ctx).expect_err("Identity must be gone");
    assert!(matches!(err, ServiceError::NotAuthenticated));
}

#[test_log::test]
fn stale_binding_resolves_to_none() {
    let db = TestDb::new().expect("Failed to create test database");

    let mut ctx = SessionContext::anonymous();
    ctx.establish(&trove_service::auth::SessionGrant {
        account_id: "deleted-account".to_string(),
        issued_at: chrono::Utc::now(),
    });

    assert!(
        resolve_current(&mut db.conn(), &ctx)
            .expect("Resolution failed")
            .is_none()
    );
    let err = require_current(&mut db.conn(), &ctx).expect_err("Stale identity must fail");
    assert!(matches!(err, ServiceError::NotAuthenticated));
}
