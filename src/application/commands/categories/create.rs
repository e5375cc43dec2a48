// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationResult, FieldErrors},
    },
    domain::{
        category::{CategorySlug, CategoryTitle, NewCategory},
        viewer::AuthenticatedViewer,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreateCategoryCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
}

impl CategoryCommandService {
    /// Categories are immutable after creation; the slug is derived from the
    /// title unless supplied. A duplicate slug surfaces as a conflict.
    pub async fn create_category(
        &self,
        actor: &AuthenticatedViewer,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let mut errors = FieldErrors::new();
        let title = errors.require("title", command.title);
        let description = errors.require("description", command.description);
        errors.into_result()?;

        let title = CategoryTitle::new(title.unwrap_or_default())?;
        let slug = match command.slug.filter(|slug| !slug.trim().is_empty()) {
            Some(slug) => CategorySlug::new(slug)?,
            None => CategorySlug::new(self.slugger.slugify(title.as_str()))?,
        };

        let created = self
            .category_repo
            .insert(NewCategory {
                title,
                description: description.unwrap_or_default(),
                slug,
            })
            .await?;
        tracing::info!(slug = %created.slug, creator = %actor.username, "category created");
        Ok(created.into())
    }
}
