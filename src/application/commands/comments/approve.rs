// src/application/commands/comments/approve.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment::CommentId, viewer::AuthenticatedViewer},
};

#[derive(Debug, Clone, Copy)]
pub struct ApproveCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    /// Idempotent: approving an already-approved comment succeeds.
    pub async fn approve_comment(
        &self,
        actor: &AuthenticatedViewer,
        command: ApproveCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        Self::ensure_moderator(actor)?;
        let id = CommentId::new(command.id)?;
        self.comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let approved = self.comment_repo.set_approved(id).await?;
        tracing::info!(comment_id = i64::from(id), moderator = %actor.username, "comment approved");
        Ok(approved.into())
    }
}
