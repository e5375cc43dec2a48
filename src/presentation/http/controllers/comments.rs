// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{ApproveCommentCommand, CreateCommentCommand, DeleteCommentCommand},
    dto::CommentDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateCommentRequest {
    pub author: Option<String>,
    pub body: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 200, body = CommentDto),
        (status = 400, description = "Missing required fields."),
        (status = 404, description = "Article absent or hidden from this viewer.")
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(viewer): MaybeAuthenticated,
    Path(article_id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    let command = CreateCommentCommand {
        article_id,
        author: payload.author,
        body: payload.body,
    };

    state
        .services
        .comment_commands
        .create_comment(&viewer, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/comments/{id}/approve",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, body = CommentDto),
        (status = 401, description = "Login required."),
        (status = 404, description = "Comment absent, or caller may not moderate.")
    ),
    tag = "Comments"
)]
pub async fn approve_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .approve_comment(&actor, ApproveCommentCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment removed."),
        (status = 401, description = "Login required."),
        (status = 404, description = "Comment absent, or caller may not moderate.")
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .comment_commands
        .delete_comment(&actor, DeleteCommentCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
