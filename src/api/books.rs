//! Book (catalog) endpoints

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::book::{Book, BookInput},
    AppState,
};

use super::{ApiJson, ApiPath, ApiQuery, AuthenticatedMember};

#[derive(Debug, Deserialize)]
pub struct ListBooksParams {
    pub page: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksParams {
    pub q: Option<String>,
}

/// List books one page at a time
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)")
    ),
    responses(
        (status = 200, description = "Page of books", body = Vec<Book>),
        (status = 400, description = "Page is not a number", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListBooksParams>,
) -> Json<Vec<Book>> {
    let books = state
        .services
        .catalog
        .list_books(params.page.unwrap_or(1))
        .await;
    Json(books)
}

/// Search books by title or author
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive text matched against title and author")
    ),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchBooksParams>,
) -> Json<Vec<Book>> {
    let query = params.q.unwrap_or_default();
    Json(state.services.catalog.search_books(&query).await)
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found"),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Extension(AuthenticatedMember(actor)): Extension<AuthenticatedMember>,
    ApiJson(input): ApiJson<BookInput>,
) -> (StatusCode, Json<Book>) {
    tracing::debug!(actor, "Create book requested");
    let created = state.services.catalog.add_book(input).await;
    (StatusCode::CREATED, Json(created))
}

/// Replace an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Extension(AuthenticatedMember(actor)): Extension<AuthenticatedMember>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<BookInput>,
) -> AppResult<Json<Book>> {
    tracing::debug!(actor, book_id = id, "Update book requested");
    let updated = state.services.catalog.update_book(id, input).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted (also when it did not exist)"),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Extension(AuthenticatedMember(actor)): Extension<AuthenticatedMember>,
    ApiPath(id): ApiPath<i64>,
) -> StatusCode {
    tracing::debug!(actor, book_id = id, "Delete book requested");
    state.services.catalog.delete_book(id).await;
    StatusCode::NO_CONTENT
}
