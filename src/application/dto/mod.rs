pub mod articles;
pub mod categories;
pub mod comments;
pub mod pagination;

pub use articles::{ArticleDetailDto, ArticleDto, ArticleSummaryDto};
pub use categories::CategoryDto;
pub use comments::CommentDto;
pub use pagination::Page;
