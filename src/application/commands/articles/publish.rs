// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, CanMutateArticleSpec},
        viewer::AuthenticatedViewer,
    },
};

#[derive(Debug, Clone, Copy)]
pub struct PublishArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Stamps the published timestamp with the current time. Publishing an
    /// already-published article refreshes the timestamp rather than
    /// failing.
    pub async fn publish_article(
        &self,
        actor: &AuthenticatedViewer,
        command: PublishArticleCommand,
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

        let now = self.clock.now();
        let published = self.write_repo.set_published(id, now).await?;
        tracing::info!(article_id = i64::from(id), "article published");
        Ok(published.into())
    }
}
