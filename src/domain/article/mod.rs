pub mod entity;
pub mod query;
pub mod repository;
pub mod value_objects;
pub mod visibility;

pub use entity::{Article, ArticleContentUpdate, NewArticle};
pub use query::{ArticleFilter, ArticleSummary, PAGE_SIZE, PageRequest};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle};
pub use visibility::{CanMutateArticleSpec, Visibility, article_visibility};
