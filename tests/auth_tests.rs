//! Token issuance and validation tests

use axum::http::{HeaderMap, HeaderValue, StatusCode};
use gatekeeper::auth::{authorize, create_token, validate_token, Claims, Rejection, User};
use gatekeeper::config::AuthConfig;

fn test_config() -> AuthConfig {
    AuthConfig {
        secret: "s3cr3t".to_string(),
        token_lifetime_minutes: 60,
    }
}

fn test_user() -> User {
    User {
        id: "u1".to_string(),
        email: "a@b.com".to_string(),
    }
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Authorization",
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("header value"),
    );
    headers
}

#[test]
fn test_issued_token_has_three_segments() {
    let token = create_token(&test_user(), &test_config()).expect("Failed to create token");
    assert!(!token.is_empty());
    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_issue_then_validate_recovers_identity() {
    let config = test_config();
    let token = create_token(&test_user(), &config).expect("Failed to create token");
    let claims = authorize(&bearer_headers(&token), &config).expect("Failed to validate");

    assert_eq!(claims.id, "u1");
    assert_eq!(claims.email, "a@b.com");
    assert!(!claims.is_expired());
}

#[test]
fn test_tokens_for_different_users_differ() {
    let config = test_config();
    let other = User {
        id: "u2".to_string(),
        email: "c@d.com".to_string(),
    };

    let token1 = create_token(&test_user(), &config).expect("Failed to create token1");
    let token2 = create_token(&other, &config).expect("Failed to create token2");
    assert_ne!(token1, token2);

    let claims1 = validate_token(&token1, &config).expect("Failed to validate token1");
    let claims2 = validate_token(&token2, &config).expect("Failed to validate token2");
    assert_eq!(claims1.id, "u1");
    assert_eq!(claims2.id, "u2");
}

#[test]
fn test_missing_header_is_bad_request() {
    let rejection = authorize(&HeaderMap::new(), &test_config()).expect_err("should reject");
    assert_eq!(rejection, Rejection::MissingBearer);
    assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_wrong_scheme_is_bad_request() {
    let mut headers = HeaderMap::new();
    headers.insert("Authorization", HeaderValue::from_static("Token abc"));

    let rejection = authorize(&headers, &test_config()).expect_err("should reject");
    assert_eq!(rejection, Rejection::MissingBearer);
    assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_foreign_secret_is_unauthorized() {
    let config = test_config();
    let foreign = AuthConfig {
        secret: "not-the-configured-secret".to_string(),
        token_lifetime_minutes: 60,
    };

    let token = create_token(&test_user(), &foreign).expect("Failed to create token");
    let rejection = authorize(&bearer_headers(&token), &config).expect_err("should reject");

    assert_eq!(rejection, Rejection::InvalidSignature);
    assert_eq!(rejection.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_truncated_token_is_bad_request() {
    let config = test_config();
    let token = create_token(&test_user(), &config).expect("Failed to create token");
    let truncated = &token[..token.len() - 10];

    let rejection = authorize(&bearer_headers(truncated), &config).expect_err("should reject");
    assert!(matches!(rejection, Rejection::BadToken(_)));
    assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_expired_token_is_bad_request() {
    let config = test_config();
    let claims = Claims {
        id: "u1".to_string(),
        email: "a@b.com".to_string(),
        exp: chrono::Utc::now().timestamp() - 3600,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .expect("Failed to encode");

    let rejection = authorize(&bearer_headers(&token), &config).expect_err("should reject");
    assert!(matches!(rejection, Rejection::BadToken(_)));
    assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_expiry_tracks_configured_lifetime() {
    let config = AuthConfig {
        secret: "s3cr3t".to_string(),
        token_lifetime_minutes: 5,
    };

    let before = chrono::Utc::now().timestamp();
    let token = create_token(&test_user(), &config).expect("Failed to create token");
    let after = chrono::Utc::now().timestamp();

    let claims = validate_token(&token, &config).expect("Failed to validate");
    assert!(claims.exp >= before + 5 * 60);
    assert!(claims.exp <= after + 5 * 60);
}
