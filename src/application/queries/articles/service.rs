// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleSummaryDto, Page},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        article::{ArticleFilter, ArticleReadRepository, PAGE_SIZE, PageRequest},
        category::CategoryRepository,
        comment::CommentRepository,
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
            comment_repo,
            clock,
        }
    }

    /// Count, clamp the requested page into range, then fetch exactly one
    /// page. Out-of-range requests land on the last page instead of erroring.
    pub(super) async fn fetch_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> ApplicationResult<Page<ArticleSummaryDto>> {
        let now = self.clock.now();
        let total = self.read_repo.count(filter, now).await?;
        let total_pages = total.div_ceil(u64::from(PAGE_SIZE)).max(1);
        let current = page.resolve(total_pages);
        let offset = (current - 1) * u64::from(PAGE_SIZE);

        let summaries = self
            .read_repo
            .list_page(filter, now, PAGE_SIZE, offset)
            .await?;
        let items = summaries.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, current, PAGE_SIZE))
    }
}
