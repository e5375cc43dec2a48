// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult, FieldErrors},
    },
    domain::{
        article::{ArticleId, article_visibility},
        comment::{CommentAuthor, CommentBody, NewComment},
        viewer::Viewer,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreateCommentCommand {
    pub article_id: i64,
    pub author: Option<String>,
    pub body: Option<String>,
}

impl CommentCommandService {
    /// Anyone may comment, but only on articles the commenting viewer can
    /// see; a comment on someone else's draft is answered with NotFound.
    pub async fn create_comment(
        &self,
        viewer: &Viewer,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let now = self.clock.now();
        let article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !article_visibility(&article, viewer, now).is_visible() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let mut errors = FieldErrors::new();
        let author = errors.require("author", command.author);
        let body = errors.require("body", command.body);
        errors.into_result()?;

        let comment = NewComment {
            article_id,
            author: CommentAuthor::new(author.unwrap_or_default())?,
            body: CommentBody::new(body.unwrap_or_default())?,
            created_at: now,
        };

        let created = self.comment_repo.insert(comment).await?;
        tracing::debug!(
            comment_id = i64::from(created.id),
            article_id = i64::from(article_id),
            "comment created"
        );
        Ok(created.into())
    }
}
