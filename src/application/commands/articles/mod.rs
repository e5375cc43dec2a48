mod create;
mod delete;
mod publish;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use publish::PublishArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
