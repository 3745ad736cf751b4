//! Route table and auth gating

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{auth, books, health, members, openapi};
use crate::AppState;

/// Authentication requirement for a group of routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Bearer,
}

/// Wrap every route in `router` with the auth gate when `access` requires it
pub fn gate(router: Router<AppState>, access: Access, state: &AppState) -> Router<AppState> {
    match access {
        Access::Public => router,
        Access::Bearer => router.route_layer(middleware::from_fn_with_state(
            state.clone(),
            super::middleware::require_auth,
        )),
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let books = Router::new()
        .route("/books", post(books::create_book).get(books::list_books))
        .route("/books/search", get(books::search_books))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        );

    // Member sign-up stays open; everything else about members is gated
    let registration = Router::new().route("/members", post(members::create_member));
    let members = Router::new().route(
        "/members/:id",
        get(members::get_member)
            .put(members::update_member)
            .delete(members::delete_member),
    );

    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/auth/token", post(auth::issue_token));

    Router::new()
        .merge(gate(books, Access::Bearer, &state))
        .merge(gate(members, Access::Bearer, &state))
        .merge(gate(registration, Access::Public, &state))
        .merge(gate(public, Access::Public, &state))
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
