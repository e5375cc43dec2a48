use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategorySlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
