// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, categories::CategoryCommandService,
            comments::CommentCommandService,
        },
        ports::{time::Clock, util::SlugGenerator},
        queries::{articles::ArticleQueryService, categories::CategoryQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::CategoryRepository,
        comment::CommentRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&clock),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slugger),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            category_commands,
            category_queries,
        }
    }
}
