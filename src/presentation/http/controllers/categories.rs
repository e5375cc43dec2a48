// src/presentation/http/controllers/categories.rs
use crate::application::{commands::categories::CreateCategoryCommand, dto::CategoryDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateCategoryRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Optional explicit slug; generated from the title when absent.
    pub slug: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses((status = 200, body = Vec<CategoryDto>)),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, body = CategoryDto),
        (status = 400, description = "Missing required fields."),
        (status = 401, description = "Login required."),
        (status = 409, description = "Slug already in use.")
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let command = CreateCategoryCommand {
        title: payload.title,
        description: payload.description,
        slug: payload.slug,
    };

    state
        .services
        .category_commands
        .create_category(&actor, command)
        .await
        .into_http()
        .map(Json)
}
