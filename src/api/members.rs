//! Member management endpoints

use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::{
    error::AppResult,
    models::member::{Member, MemberInput},
    AppState,
};

use super::{ApiJson, ApiPath, AuthenticatedMember};

/// Register a new member (no authentication)
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = MemberInput,
    responses(
        (status = 201, description = "Member created", body = Member),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<MemberInput>,
) -> (StatusCode, Json<Member>) {
    let created = state.services.members.add_member(input).await;
    (StatusCode::CREATED, Json(created))
}

/// Get member details by ID
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 404, description = "Member not found"),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Member>> {
    let member = state.services.members.get_member(id).await?;
    Ok(Json(member))
}

/// Replace an existing member
#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Member ID")
    ),
    request_body = MemberInput,
    responses(
        (status = 200, description = "Member updated", body = Member),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    Extension(AuthenticatedMember(actor)): Extension<AuthenticatedMember>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<MemberInput>,
) -> AppResult<Json<Member>> {
    tracing::debug!(actor, member_id = id, "Update member requested");
    let updated = state.services.members.update_member(id, input).await?;
    Ok(Json(updated))
}

/// Delete a member
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Member deleted (also when it did not exist)"),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Extension(AuthenticatedMember(actor)): Extension<AuthenticatedMember>,
    ApiPath(id): ApiPath<i64>,
) -> StatusCode {
    tracing::debug!(actor, member_id = id, "Delete member requested");
    state.services.members.delete_member(id).await;
    StatusCode::NO_CONTENT
}
