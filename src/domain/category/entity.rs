// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategorySlug, CategoryTitle};

/// Categories are immutable once created; articles reference them by id and
/// listings address them by slug.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub title: CategoryTitle,
    pub description: String,
    pub slug: CategorySlug,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub title: CategoryTitle,
    pub description: String,
    pub slug: CategorySlug,
}
