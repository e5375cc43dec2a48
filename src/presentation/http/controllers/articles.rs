// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, PublishArticleCommand, UpdateArticleCommand,
    },
    dto::{ArticleDetailDto, ArticleDto, ArticleSummaryDto, Page},
    queries::articles::{
        GetArticleQuery, ListArticlesQuery, ListByAuthorQuery, ListByCategoryQuery,
        ListByDayQuery, ListDraftsQuery, SearchArticlesQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Requested page number; non-numeric input serves the first page and
    /// out-of-range numbers serve the last one.
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search term; an empty term yields an empty result set.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub category_id: Option<i64>,
    pub body: Option<String>,
    #[serde(default)]
    pub publish: bool,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub category_id: Option<i64>,
    pub body: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(PageParams),
    responses((status = 200, description = "Published articles, newest first.", body = Page<ArticleSummaryDto>)),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: params.page })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/category/{slug}",
    params(("slug" = String, Path, description = "Category slug"), PageParams),
    responses((status = 200, body = Page<ArticleSummaryDto>)),
    tag = "Articles"
)]
pub async fn list_by_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_by_category(ListByCategoryQuery {
            slug,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/author/{username}",
    params(("username" = String, Path, description = "Author username"), PageParams),
    responses((status = 200, body = Page<ArticleSummaryDto>)),
    tag = "Articles"
)]
pub async fn list_by_author(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_by_author(ListByAuthorQuery {
            username,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/archive/{year}/{month}/{day}",
    params(
        ("year" = i32, Path, description = "Publication year"),
        ("month" = u32, Path, description = "Publication month"),
        ("day" = u32, Path, description = "Publication day"),
        PageParams
    ),
    responses((status = 200, body = Page<ArticleSummaryDto>)),
    tag = "Articles"
)]
pub async fn list_by_day(
    Extension(state): Extension<HttpState>,
    Path((year, month, day)): Path<(i32, u32, u32)>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_by_day(ListByDayQuery {
            year,
            month,
            day,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/search",
    params(SearchParams),
    responses((status = 200, body = Page<ArticleSummaryDto>)),
    tag = "Articles"
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<Page<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .search_articles(SearchArticlesQuery {
            term: params.q,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/drafts",
    params(PageParams),
    responses(
        (status = 200, description = "The caller's unpublished articles.", body = Page<ArticleSummaryDto>),
        (status = 401, description = "Login required.")
    ),
    tag = "Articles"
)]
pub async fn list_drafts(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_drafts(&actor, ListDraftsQuery { page: params.page })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, body = ArticleDetailDto),
        (status = 404, description = "Absent, or hidden from this viewer.")
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(viewer): MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .get_article(&viewer, GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, body = ArticleDto),
        (status = 400, description = "Missing required fields."),
        (status = 401, description = "Login required.")
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        category_id: payload.category_id,
        body: payload.body,
        publish: payload.publish,
    };

    state
        .services
        .article_commands
        .create_article(&actor, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, body = ArticleDto),
        (status = 404, description = "Absent, or not owned by the caller.")
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        category_id: payload.category_id,
        body: payload.body,
    };

    state
        .services
        .article_commands
        .update_article(&actor, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article and its comments removed."),
        (status = 404, description = "Absent, or not owned by the caller.")
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&actor, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/publish",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, body = ArticleDto),
        (status = 404, description = "Absent, or not owned by the caller.")
    ),
    tag = "Articles"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .publish_article(&actor, PublishArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}
