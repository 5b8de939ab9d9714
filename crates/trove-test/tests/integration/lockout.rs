//! The lockout state machine end to end: threshold, uniform failure, and
//! administrative reset.

use trove_service::account;
use trove_service::error::ServiceError;

use super::helpers::{LOCKOUT_THRESHOLD, TEST_PASSWORD, TestDb, auth_service, promote_to_admin, register, reload};

#[test_log::test]
fn account_locks_after_threshold_and_admin_reset_reopens() {
    let db = TestDb::new().expect("Failed to create test database");
    let service = auth_service();

    let alice = register(&db, &service, "alice");
    let admin = promote_to_admin(&db, &register(&db, &service, "admin"));

    // Wrong password up to the threshold
    for _ in 0..LOCKOUT_THRESHOLD {
        let err = service
            .login(&mut db.conn(), &alice.email, "Wrong1!aaaa")
            .expect_err("Wrong password should fail");
        assert!(matches!(err, ServiceError::AuthenticationFailed));
    }
    assert_eq!(
        u32::try_from(reload(&db, &alice.id).failed_login_count).expect("non-negative"),
        LOCKOUT_THRESHOLD
    );

    // Locked: even the correct password fails, with the same generic error,
    // and the counter keeps recording the attempt.
    let locked = service
        .login(&mut db.conn(), &alice.email, TEST_PASSWORD)
        .expect_err("Locked account must reject the correct password");
    assert!(matches!(locked, ServiceError::AuthenticationFailed));
    assert_eq!(
        locked.to_string(),
        ServiceError::AuthenticationFailed.to_string()
    );
    assert_eq!(
        u32::try_from(reload(&db, &alice.id).failed_login_count).expect("non-negative"),
        LOCKOUT_THRESHOLD + 1
    );

    // Administrative reset reopens the account
    account::reset_lockout(&mut db.conn(), &admin, &alice.id).expect("Reset failed");
    assert_eq!(reload(&db, &alice.id).failed_login_count, 0);

    service
        .login(&mut db.conn(), &alice.email, TEST_PASSWORD)
        .expect("Login after reset should succeed");
}

#[test_log::test]
fn below_threshold_correct_password_still_works() {
    let db = TestDb::new().expect("Failed to create test database");
    let service = auth_service();

    let alice = register(&db, &service, "alice");

    for _ in 0..(LOCKOUT_THRESHOLD - 1) {
        let _ = service.login(&mut db.conn(), &alice.email, "Wrong1!aaaa");
    }

    service
        .login(&mut db.conn(), &alice.email, TEST_PASSWORD)
        .expect("Account should still be open");
    assert_eq!(reload(&db, &alice.id).failed_login_count, 0);
}

#[test_log::test]
fn only_admins_reset_lockouts() {
    let db = TestDb::new().expect("Failed to create test database");
    let service = auth_service();

    let alice = register(&db, &service, "alice");
    let bob = register(&db, &service, "bob");
    let admin = promote_to_admin(&db, &register(&db, &service, "admin"));

    let err = account::reset_lockout(&mut db.conn(), &bob, &alice.id)
        .expect_err("Non-admin reset must be denied");
    assert!(matches!(err, ServiceError::AccessDenied));

    // The admin gate runs before existence is revealed
    let err = account::reset_lockout(&mut db.conn(), &bob, "no-such-account")
        .expect_err("Non-admin reset must be denied");
    assert!(matches!(err, ServiceError::AccessDenied));

    let err = account::reset_lockout(&mut db.conn(), &admin, "no-such-account")
        .expect_err("Missing account should be reported to admins");
    assert!(matches!(err, ServiceError::NotFound(_)));
}
