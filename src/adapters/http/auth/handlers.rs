//! HTTP handlers for auth endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::LoginCommand;
use crate::domain::foundation::AuthError;

use super::super::error::ApiError;
use super::super::middleware::bearer_token;
use super::super::state::ApiState;
use super::dto::{LoginFailure, LoginRequest, LoginResponse, SessionResponse};

/// `POST /api/auth/login`
///
/// A malformed body is a 400; a credential mismatch is a 401 with the
/// `{success: false, error}` body the client branches on. Neither is an
/// exception path.
pub async fn login(
    State(state): State<ApiState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return ApiError::bad_request("Malformed request body").into_response();
    };

    let command = LoginCommand {
        email: request.email,
        password: request.password,
    };

    match state.login_handler().handle(command).await {
        Ok(result) => Json(LoginResponse {
            success: true,
            user: result.user,
            token: result.token,
            expires_at: result.expires_at,
        })
        .into_response(),
        Err(AuthError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            Json(LoginFailure::invalid_credentials()),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// `GET /api/auth/session`
pub async fn current_session(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, ApiError> {
    let token =
        bearer_token(&headers).ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    let user = state.current_session_handler().handle(token).await?;
    Ok(Json(SessionResponse { user }))
}

/// `POST /api/auth/logout`
pub async fn logout(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token =
        bearer_token(&headers).ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    state.logout_handler().handle(token).await?;
    Ok(StatusCode::NO_CONTENT)
}
