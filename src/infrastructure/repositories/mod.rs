// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_category;
mod sqlite_comment;

pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_comment::SqliteCommentRepository;
