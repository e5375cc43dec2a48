mod drafts;
mod get_by_id;
mod list;
mod search;
mod service;

pub use drafts::ListDraftsQuery;
pub use get_by_id::GetArticleQuery;
pub use list::{ListArticlesQuery, ListByAuthorQuery, ListByCategoryQuery, ListByDayQuery};
pub use search::SearchArticlesQuery;
pub use service::ArticleQueryService;
