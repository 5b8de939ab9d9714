//! Registration and login flows, including the generic-failure and
//! concurrency guarantees.

use std::sync::Barrier;

use trove_service::auth::RegisterInput;
use trove_service::error::ServiceError;

use super::helpers::{TEST_DOMAIN, TEST_PASSWORD, TestDb, auth_service, register, reload};

#[test_log::test]
fn register_then_login_succeeds() {
    let db = TestDb::new().expect("Failed to create test database");
    let service = auth_service();

    let account = register(&db, &service, "alice");
    assert!(!account.is_admin);
    assert_eq!(account.failed_login_count, 0);

    let grant = service
        .login(&mut db.conn(), &account.email, TEST_PASSWORD)
        .expect("Login failed");
    assert_eq!(grant.account_id, account.id);
}

#[test_log::test]
fn duplicate_registration_fails_generically() {
    let db = TestDb::new().expect("Failed to create test database");
    let service = auth_service();

    register(&db, &service, "alice");

    let err = service
        .register(
            &mut db.conn(),
            &RegisterInput {
                email: &format!("alice@{TEST_DOMAIN}"),
                first_name: "Another",
                last_name: "Alice",
                password: TEST_PASSWORD,
            },
        )
        .expect_err("Second registration should fail");

    assert!(matches!(err, ServiceError::DuplicateEmail));
    // The user-facing message must not confirm that the address exists
    assert!(!err.to_string().to_lowercase().contains("already"));
}

#[test_log::test]
fn registration_validates_input() {
    let db = TestDb::new().expect("Failed to create test database");
    let service = auth_service();
    let mut conn = db.conn();

    let email = format!("alice@{TEST_DOMAIN}");
    let base = RegisterInput {
        email: &email,
        first_name: "Alice",
        last_name: "Example",
        password: TEST_PASSWORD,
    };

    let cases = [
        RegisterInput {
            email: "alice@unapproved.example",
            ..base
        },
        RegisterInput {
            email: "not-an-email",
            ..base
        },
        RegisterInput {
            email: "<script>@approved.example",
            ..base
        },
        RegisterInput {
            password: "weak",
            ..base
        },
        RegisterInput {
            password: "alllowercase1!",
            ..base
        },
        RegisterInput {
            first_name: "",
            ..base
        },
        RegisterInput {
            last_name: "O'Brien<script>",
            ..base
        },
    ];

    for input in cases {
        let err = service
            .register(&mut conn, &input)
            .expect_err("Registration should be rejected");
        assert!(
            matches!(err, ServiceError::ValidationError(_)),
            "unexpected error for {input:?}: {err}"
        );
    }
}

#[test_log::test]
fn login_failures_are_uniform() {
    let db = TestDb::new().expect("Failed to create test database");
    let service = auth_service();

    let account = register(&db, &service, "alice");

    let unknown = service
        .login(&mut db.conn(), &format!("ghost@{TEST_DOMAIN}"), TEST_PASSWORD)
        .expect_err("Unknown email should fail");
    let wrong = service
        .login(&mut db.conn(), &account.email, "Wrong1!aaaa")
        .expect_err("Wrong password should fail");

    assert!(matches!(unknown, ServiceError::AuthenticationFailed));
    assert!(matches!(wrong, ServiceError::AuthenticationFailed));
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[test_log::test]
fn failed_logins_count_and_successful_login_resets() {
    let db = TestDb::new().expect("Failed to create test database");
    let service = auth_service();

    let account = register(&db, &service, "alice");

    for _ in 0..2 {
        let _ = service.login(&mut db.conn(), &account.email, "Wrong1!aaaa");
    }
    assert_eq!(reload(&db, &account.id).failed_login_count, 2);

    service
        .login(&mut db.conn(), &account.email, TEST_PASSWORD)
        .expect("Login failed");
    assert_eq!(reload(&db, &account.id).failed_login_count, 0);
}

#[test_log::test]
fn concurrent_registration_has_exactly_one_winner() {
    let db = TestDb::new().expect("Failed to create test database");
    let service = auth_service();
    let email = format!("race@{TEST_DOMAIN}");
    let barrier = Barrier::new(2);

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                scope.spawn(|| {
                    let mut conn = db.conn();
                    barrier.wait();
                    service.register(
                        &mut conn,
                        &RegisterInput {
                            email: &email,
                            first_name: "Race",
                            last_name: "Entrant",
                            password: TEST_PASSWORD,
                        },
                    )
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("Thread panicked"))
            .collect()
    });

    let winners = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(winners, 1, "exactly one registration must win");
    assert!(
        results
            .iter()
            .any(|result| matches!(result, Err(ServiceError::DuplicateEmail))),
        "the loser must observe a duplicate-email failure"
    );
}
