//! API handlers for Libris REST endpoints

pub mod auth;
pub mod books;
pub mod health;
pub mod members;
pub mod middleware;
pub mod openapi;
pub mod router;

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

pub use router::create_router;

/// Member resolved from the bearer token by [`middleware::require_auth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedMember(pub i64);

/// JSON body extractor that reports failures as [`AppError::Validation`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor; a segment that does not parse is a plain 404
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string extractor that reports failures as [`AppError::BadRequest`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
