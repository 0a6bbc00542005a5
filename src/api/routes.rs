//! API route handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;

use super::server::SharedState;
use crate::auth::jwt;
use crate::auth::middleware::AuthenticatedUser;
use crate::auth::models::{LoginRequest, LoginResponse};

// Request/Response types

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: String,
}

// Health check

pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok("healthy"))
}

// Auth routes

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let Some(user) = state.users.verify(&req.email, &req.password) else {
        if state.config.logging.enabled {
            tracing::error!("login failed for {}", req.email);
        }
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::err("invalid credentials")),
        )
            .into_response();
    };

    match jwt::create_token(&user, &state.config.auth) {
        Ok(token) => (
            StatusCode::OK,
            Json(ApiResponse::ok(LoginResponse {
                token,
                user: user.into(),
            })),
        )
            .into_response(),
        Err(e) => {
            if state.config.logging.enabled {
                tracing::error!("token issuance failed: {}", e);
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::err(e.to_string())),
            )
                .into_response()
        }
    }
}

// Protected routes

pub async fn me(Extension(user): Extension<AuthenticatedUser>) -> impl IntoResponse {
    Json(ApiResponse::ok(MeResponse {
        user_id: user.user_id,
    }))
}
