// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, categories, comments};
use crate::presentation::http::openapi;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer,
};
use utoipa::ToSchema;

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/v1/articles/search", get(articles::search_articles))
        .route("/api/v1/articles/drafts", get(articles::list_drafts))
        .route(
            "/api/v1/articles/category/{slug}",
            get(articles::list_by_category),
        )
        .route(
            "/api/v1/articles/author/{username}",
            get(articles::list_by_author),
        )
        .route(
            "/api/v1/articles/archive/{year}/{month}/{day}",
            get(articles::list_by_day),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/v1/articles/{id}/publish",
            post(articles::publish_article),
        )
        .route(
            "/api/v1/articles/{id}/comments",
            post(comments::create_comment),
        )
        .route(
            "/api/v1/comments/{id}/approve",
            post(comments::approve_comment),
        )
        .route(
            "/api/v1/comments/{id}",
            axum::routing::delete(comments::delete_comment),
        )
        .route(
            "/api/v1/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service health check.", body = StatusResponse)),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
