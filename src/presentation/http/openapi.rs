// src/presentation/http/openapi.rs
use crate::application::dto::{
    ArticleDetailDto, ArticleDto, ArticleSummaryDto, CategoryDto, CommentDto, Page,
};
use crate::application::error::FieldError;
use crate::presentation::http::controllers::{articles, categories, comments};
use crate::presentation::http::routes;
use axum::Router;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "aboutblog API",
        description = "Blog publishing service: categorized articles with drafts, scheduled publication and moderated comments."
    ),
    paths(
        routes::health,
        articles::list_articles,
        articles::search_articles,
        articles::list_drafts,
        articles::list_by_category,
        articles::list_by_author,
        articles::list_by_day,
        articles::get_article,
        articles::create_article,
        articles::update_article,
        articles::delete_article,
        articles::publish_article,
        comments::create_comment,
        comments::approve_comment,
        comments::delete_comment,
        categories::list_categories,
        categories::create_category,
    ),
    components(schemas(
        Page<ArticleSummaryDto>,
        ArticleSummaryDto,
        ArticleDto,
        ArticleDetailDto,
        CommentDto,
        CategoryDto,
        FieldError,
        articles::CreateArticleRequest,
        articles::UpdateArticleRequest,
        comments::CreateCommentRequest,
        categories::CreateCategoryRequest,
        routes::StatusResponse,
    )),
    tags(
        (name = "Articles", description = "Listing, search, drafts and article lifecycle."),
        (name = "Comments", description = "Visitor comments and moderation."),
        (name = "Categories", description = "Category directory."),
        (name = "System", description = "Operational endpoints.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}
