use crate::domain::category::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub slug: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            title: category.title.into(),
            description: category.description,
            slug: category.slug.into(),
        }
    }
}
