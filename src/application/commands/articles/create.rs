// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationResult, FieldErrors},
    },
    domain::{
        article::{ArticleBody, ArticleTitle, NewArticle},
        category::CategoryId,
        viewer::AuthenticatedViewer,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: Option<String>,
    pub category_id: Option<i64>,
    pub body: Option<String>,
    pub publish: bool,
}

impl ArticleCommandService {
    /// The author is always the authenticated identity; submitted data can
    /// never attribute the article to someone else.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedViewer,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut errors = FieldErrors::new();
        let title = errors.require("title", command.title);
        let body = errors.require("body", command.body);
        if command.category_id.is_none() {
            errors.push("category", "this field is required");
        }
        errors.into_result()?;

        let category_id = self.resolve_category(command.category_id).await?;
        let title = ArticleTitle::new(title.unwrap_or_default())?;
        let body = ArticleBody::new(body.unwrap_or_default())?;
        let now = self.clock.now();

        let new_article = NewArticle {
            author: actor.username.clone(),
            category_id,
            title,
            body,
            created_at: now,
            published_at: command.publish.then_some(now),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = i64::from(created.id), author = %created.author, "article created");
        Ok(created.into())
    }

    pub(super) async fn resolve_category(
        &self,
        category_id: Option<i64>,
    ) -> ApplicationResult<CategoryId> {
        use crate::application::error::ApplicationError;

        let id = CategoryId::new(category_id.unwrap_or_default())
            .map_err(|_| ApplicationError::field("category", "select a valid category"))?;
        self.category_repo
            .find_by_id(id)
            .await?
            .map(|category| category.id)
            .ok_or_else(|| ApplicationError::field("category", "select a valid category"))
    }
}
