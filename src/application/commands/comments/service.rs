// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{article::ArticleReadRepository, comment::CommentRepository, viewer::AuthenticatedViewer},
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            clock,
        }
    }

    /// Moderation gate. A viewer without the moderation right is told the
    /// comment does not exist, mirroring the article ownership masking.
    pub(super) fn ensure_moderator(actor: &AuthenticatedViewer) -> ApplicationResult<()> {
        if actor.role.can_moderate_comments() {
            Ok(())
        } else {
            Err(ApplicationError::not_found("comment not found"))
        }
    }
}
