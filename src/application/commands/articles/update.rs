use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult, FieldErrors},
    },
    domain::{
        article::{
            ArticleBody, ArticleContentUpdate, ArticleId, ArticleTitle, CanMutateArticleSpec,
        },
        viewer::AuthenticatedViewer,
    },
};

#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub category_id: Option<i64>,
    pub body: Option<String>,
}

impl ArticleCommandService {
    /// Replaces title, category and body. A non-owner gets NotFound, not a
    /// permission error, so the edit endpoint never confirms the article
    /// exists.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedViewer,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !CanMutateArticleSpec::new(&article, actor).is_satisfied() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let mut errors = FieldErrors::new();
        let title = errors.require("title", command.title);
        let body = errors.require("body", command.body);
        if command.category_id.is_none() {
            errors.push("category", "this field is required");
        }
        errors.into_result()?;

        let category_id = self.resolve_category(command.category_id).await?;
        let update = ArticleContentUpdate {
            id,
            category_id,
            title: ArticleTitle::new(title.unwrap_or_default())?,
            body: ArticleBody::new(body.unwrap_or_default())?,
        };

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = i64::from(updated.id), "article updated");
        Ok(updated.into())
    }
}
