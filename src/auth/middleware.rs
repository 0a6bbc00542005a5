//! Authentication middleware and request guard

use crate::auth::jwt::{validate_token, Claims};
use crate::config::AuthConfig;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::errors::ErrorKind;
use std::fmt;

use crate::api::routes::ApiResponse;
use crate::api::server::SharedState;

/// Verified user identity stored in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Why the guard refused a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Header absent, wrong scheme, or not a single token segment
    MissingBearer,
    /// Signature did not match the configured secret
    InvalidSignature,
    /// Token unparseable, expired, or otherwise unusable
    BadToken(String),
    /// Claims decoded but already past their expiry
    Expired,
}

impl Rejection {
    /// HTTP status this rejection maps to
    ///
    /// A bad signature is an authentication failure (401); a header or token
    /// the service cannot use at all is a bad request (400). Expired tokens
    /// surface through the decode step and so land in the 400 bucket.
    pub fn status(&self) -> StatusCode {
        match self {
            Rejection::MissingBearer | Rejection::BadToken(_) => StatusCode::BAD_REQUEST,
            Rejection::InvalidSignature | Rejection::Expired => StatusCode::UNAUTHORIZED,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingBearer => write!(f, "authorization token not valid"),
            Rejection::InvalidSignature => write!(f, "token signature invalid"),
            Rejection::BadToken(msg) => write!(f, "{}", msg),
            Rejection::Expired => write!(f, "token expired"),
        }
    }
}

/// Validate the `Authorization` header against the configured secret
///
/// Pure over the headers; `require_auth` adapts the outcome to an HTTP
/// response at the router boundary.
pub fn authorize(headers: &HeaderMap, auth: &AuthConfig) -> Result<Claims, Rejection> {
    let token = bearer_token(headers).ok_or(Rejection::MissingBearer)?;

    let claims = validate_token(token, auth).map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => Rejection::InvalidSignature,
        _ => Rejection::BadToken(e.to_string()),
    })?;

    // Decode already enforces exp; this only trips if validation was relaxed
    if claims.is_expired() {
        return Err(Rejection::Expired);
    }

    Ok(claims)
}

/// Extract the token from a `Bearer <token>` authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get("Authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;

    if token.is_empty() || token.contains(' ') {
        return None;
    }

    Some(token)
}

/// Middleware guarding protected routes
///
/// On success the verified user id is stored in request extensions for
/// downstream handlers; on failure the request is terminated with the
/// rejection's status and a JSON error body.
pub async fn require_auth(
    State(state): State<SharedState>,
    mut req: Request,
    next: Next,
) -> Response {
    match authorize(req.headers(), &state.config.auth) {
        Ok(claims) => {
            req.extensions_mut()
                .insert(AuthenticatedUser { user_id: claims.id });
            next.run(req).await
        }
        Err(rejection) => {
            if state.config.logging.enabled {
                tracing::error!("authorization failed: {}", rejection);
            }
            (
                rejection.status(),
                Json(ApiResponse::<()>::err(rejection.to_string())),
            )
                .into_response()
        }
    }
}
