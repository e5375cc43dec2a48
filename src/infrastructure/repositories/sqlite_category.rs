// src/infrastructure/repositories/sqlite_category.rs
use super::error::map_sqlx;
use crate::domain::category::{
    Category, CategoryId, CategoryRepository, CategorySlug, CategoryTitle, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCategoryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    title: String,
    description: String,
    slug: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            title: CategoryTitle::new(row.title)?,
            description: row.description,
            slug: CategorySlug::new(row.slug)?,
        })
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            title,
            description,
            slug,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (title, description, slug)
             VALUES (?, ?, ?)
             RETURNING id, title, description, slug",
        )
        .bind(title.as_str())
        .bind(description)
        .bind(slug.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, title, description, slug FROM categories WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, title, description, slug FROM categories WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, title, description, slug FROM categories ORDER BY title ASC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}
