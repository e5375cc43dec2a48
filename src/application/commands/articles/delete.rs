// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{ArticleId, CanMutateArticleSpec},
        viewer::AuthenticatedViewer,
    },
};

#[derive(Debug, Clone, Copy)]
pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Deletes the article and its comments; comments cannot outlive their
    /// parent. Non-owners get NotFound.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedViewer,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !CanMutateArticleSpec::new(&article, actor).is_satisfied() {
            return Err(ApplicationError::not_found("article not found"));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(article_id = i64::from(id), "article deleted");
        Ok(())
    }
}
