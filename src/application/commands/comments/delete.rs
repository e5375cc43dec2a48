// src/application/commands/comments/delete.rs
use super::CommentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{comment::CommentId, viewer::AuthenticatedViewer},
};

#[derive(Debug, Clone, Copy)]
pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedViewer,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        Self::ensure_moderator(actor)?;
        let id = CommentId::new(command.id)?;
        self.comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        self.comment_repo.delete(id).await?;
        tracing::info!(comment_id = i64::from(id), moderator = %actor.username, "comment deleted");
        Ok(())
    }
}
