// src/application/queries/articles/get_by_id.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, article_visibility},
        viewer::Viewer,
    },
};

#[derive(Debug, Clone, Copy)]
pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Detail view with the article's comment thread. Hidden and absent
    /// articles are indistinguishable to the caller.
    pub async fn get_article(
        &self,
        viewer: &Viewer,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = ArticleId::new(query.id)?;
        let now = self.clock.now();
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !article_visibility(&article, viewer, now).is_visible() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let category = self
            .category_repo
            .find_by_id(article.category_id)
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("article category missing"))?;

        let comments = self
            .comment_repo
            .list_for_article(id, now)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ArticleDetailDto {
            article: article.into(),
            category_slug: category.slug.into(),
            category_title: category.title.into(),
            comments,
        })
    }
}
