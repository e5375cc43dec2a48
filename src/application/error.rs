// src/application/error.rs
use crate::domain::errors::DomainError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// One form-level violation, keyed by the offending field so a caller can
/// re-render the form with inline messages.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Collects violations across all fields before failing, rather than
/// stopping at the first empty field.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Records a violation when `value` is missing or blank, otherwise hands
    /// back the trimmed-checked original.
    pub fn require(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        match value {
            Some(value) if !value.trim().is_empty() => Some(value),
            _ => {
                self.push(field, "this field is required");
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> ApplicationResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::Validation(self.0))
        }
    }
}

/// Failure taxonomy surfaced to callers. Ownership failures are reported as
/// `NotFound` on purpose so a non-owner cannot confirm that a hidden record
/// exists; there is no distinct forbidden variant.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("authentication required: {0}")]
    Unauthenticated(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError {
            field,
            message: message.into(),
        }])
    }
}
