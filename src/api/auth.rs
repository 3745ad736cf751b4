//! Token endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

use super::ApiJson;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TokenRequest {
    /// Member the token is issued for
    #[serde(default)]
    pub member_id: Option<i64>,
}

#[derive(Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Issue a one-hour bearer token for an existing member
#[utoipa::path(
    post,
    path = "/auth/token",
    tag = "auth",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn issue_token(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state.services.auth.issue_token(request.member_id).await?;
    Ok(Json(TokenResponse { token }))
}
