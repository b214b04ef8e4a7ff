//! Service-level tests for the registration, login and authorization flow.
//!
//! Every test runs against the in-memory user repository.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio_test::{assert_err, assert_ok};

use credential_service::errors::AppError;
use credential_service::infra::{InMemoryUserRepository, UserRepository};
use credential_service::services::{
    AuthService, Authenticator, Authorizer, InvalidToken, Registrar, RegistrationService,
    TokenIssuer,
};

const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

struct Harness {
    repo: Arc<InMemoryUserRepository>,
    tokens: TokenIssuer,
    registrar: Arc<Registrar>,
    authenticator: Authenticator,
    authorizer: Authorizer,
}

fn harness() -> Harness {
    let repo = Arc::new(InMemoryUserRepository::new());
    let tokens = TokenIssuer::new(SECRET, Duration::hours(24));
    let users: Arc<dyn UserRepository> = repo.clone();

    Harness {
        registrar: Arc::new(Registrar::new(users.clone())),
        authenticator: Authenticator::new(users.clone(), tokens.clone()),
        authorizer: Authorizer::new(users, tokens.clone()),
        tokens,
        repo,
    }
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_stores_hash_not_plaintext() {
    let h = harness();
    let credentials = [
        ("a@b.com", "secret"),
        ("test@test.com", "supersecret"),
        ("ünïcødé@example.org", "pässwörd with spaces"),
    ];

    for (email, password) in credentials {
        let user = h.registrar.register(email, password).await.unwrap();

        assert_eq!(user.email, email);
        assert!(!user.password_hash.is_empty());
        assert_ne!(user.password_hash, password);

        let stored = h.repo.find_by_email(email).await.unwrap().unwrap();
        assert_eq!(stored.id, user.id);
        assert_ne!(stored.password_hash, password);
    }
}

#[tokio::test]
async fn test_duplicate_email_conflicts_regardless_of_password() {
    let h = harness();
    assert_ok!(h.registrar.register("a@b.com", "secret").await);

    for password in ["secret", "different", "x"] {
        let result = h.registrar.register("a@b.com", password).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    assert_eq!(h.repo.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_yield_one_success_one_conflict() {
    for round in 0..10 {
        let h = harness();
        let email = format!("race-{}@example.com", round);

        let first = {
            let registrar = h.registrar.clone();
            let email = email.clone();
            tokio::spawn(async move { registrar.register(&email, "password-one").await })
        };
        let second = {
            let registrar = h.registrar.clone();
            let email = email.clone();
            tokio::spawn(async move { registrar.register(&email, "password-two").await })
        };

        let results = [first.await.unwrap(), second.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(AppError::Conflict(_))))
            .count();

        assert_eq!(successes, 1, "round {}", round);
        assert_eq!(conflicts, 1, "round {}", round);
        assert_eq!(h.repo.len().await, 1);
    }
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_with_registered_password_yields_subject_token() {
    let h = harness();
    let user = h.registrar.register("a@b.com", "secret").await.unwrap();

    let response = h.authenticator.login("a@b.com", "secret").await.unwrap();

    assert!(!response.token.is_empty());
    assert_eq!(h.tokens.validate(&response.token), Ok(user.id));
}

#[tokio::test]
async fn test_login_with_any_other_password_is_rejected() {
    let h = harness();
    h.registrar.register("a@b.com", "secret").await.unwrap();

    for password in ["wrong", "Secret", "secret ", "", "secretsecret"] {
        let result = h.authenticator.login("a@b.com", password).await;
        assert!(
            matches!(result, Err(AppError::InvalidCredentials)),
            "password {:?} was accepted",
            password
        );
    }
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password_outcome() {
    let h = harness();
    h.registrar.register("a@b.com", "secret").await.unwrap();

    let unknown = h.authenticator.login("nobody@b.com", "secret").await;
    let wrong = h.authenticator.login("a@b.com", "wrong").await;

    let unknown = assert_err!(unknown);
    let wrong = assert_err!(wrong);
    assert_eq!(unknown.code(), wrong.code());
    assert_eq!(unknown.status(), wrong.status());
    assert_eq!(unknown.to_string(), wrong.to_string());
}

// =============================================================================
// Tokens and authorization
// =============================================================================

#[tokio::test]
async fn test_token_expires_after_ttl() {
    let h = harness();
    let user = h.registrar.register("a@b.com", "secret").await.unwrap();
    let issued_at = Utc::now();
    let token = h.tokens.issue_at(user.id, issued_at).unwrap();

    assert_eq!(h.tokens.validate_at(&token, issued_at), Ok(user.id));
    assert_eq!(
        h.tokens.validate_at(&token, issued_at + Duration::hours(24)),
        Err(InvalidToken)
    );
}

#[tokio::test]
async fn test_expired_token_is_unauthenticated() {
    let h = harness();
    let user = h.registrar.register("a@b.com", "secret").await.unwrap();
    let stale = h
        .tokens
        .issue_at(user.id, Utc::now() - Duration::hours(25))
        .unwrap();

    let result = h.authorizer.authorize(Some(&format!("Bearer {}", stale))).await;

    assert!(matches!(result, Err(AppError::Unauthenticated)));
}

#[tokio::test]
async fn test_scenario_register_login_profile() {
    let h = harness();

    let created = h.registrar.register("a@b.com", "secret").await.unwrap();
    assert_eq!(created.email, "a@b.com");
    assert_ne!(created.password_hash, "secret");

    let again = h.registrar.register("a@b.com", "other").await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    let token = h.authenticator.login("a@b.com", "secret").await.unwrap().token;
    assert!(!token.is_empty());

    let wrong = h.authenticator.login("a@b.com", "wrong").await;
    assert!(matches!(wrong, Err(AppError::InvalidCredentials)));

    let profile = h
        .authorizer
        .authorize(Some(&format!("Bearer {}", token)))
        .await
        .unwrap();
    assert_eq!(profile.email, "a@b.com");

    let missing = h.authorizer.authorize(None).await;
    assert!(matches!(missing, Err(AppError::Unauthenticated)));

    let mut mutated = token.clone();
    let last = mutated.pop().unwrap();
    mutated.push(if last == 'A' { 'B' } else { 'A' });
    let tampered = h
        .authorizer
        .authorize(Some(&format!("Bearer {}", mutated)))
        .await;
    assert!(matches!(tampered, Err(AppError::Unauthenticated)));
}
