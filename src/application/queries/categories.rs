// src/application/queries/categories.rs
use std::sync::Arc;

use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::CategoryRepository,
};

pub struct CategoryQueryService {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.category_repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
