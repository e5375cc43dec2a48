use crate::application::{ApplicationResult, error::ApplicationError, error::FieldError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    fields: Vec<FieldError>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(fields) => Self {
                status: StatusCode::BAD_REQUEST,
                message: "validation failed".into(),
                fields,
            },
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Unauthenticated(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Infrastructure(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            DomainError::Persistence(msg) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg),
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            fields: Vec::new(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            fields: self.fields,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
