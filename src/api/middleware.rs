//! Bearer token gate
//!
//! Applied as a route layer to every protected router. Resolves the
//! `Authorization: Bearer <token>` header to a member id and stores it in
//! the request extensions as [`AuthenticatedMember`].

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use super::AuthenticatedMember;
use crate::{error::AppError, AppState};

/// Reject the request unless it carries a live bearer token
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_owned)
        .ok_or_else(|| {
            tracing::debug!(path = %request.uri().path(), "Missing or malformed authorization header");
            AppError::Authentication("Missing or invalid token".to_string())
        })?;

    let member_id = state.services.auth.validate_token(&token).await.map_err(|e| {
        tracing::debug!(path = %request.uri().path(), "Rejected bearer token");
        e
    })?;

    request.extensions_mut().insert(AuthenticatedMember(member_id));
    Ok(next.run(request).await)
}

/// Token part of a `Bearer <token>` header: the text after the prefix, up to the next space
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .and_then(|rest| rest.split(' ').next())
}
