// src/presentation/http/extractors.rs
//
// Authentication itself is an external concern: a fronting proxy
// authenticates the request and injects the viewer's identity as trusted
// headers. These extractors only translate those headers into a `Viewer`.
use crate::{
    application::error::ApplicationError,
    domain::viewer::{AuthenticatedViewer, Role, Username, Viewer},
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedViewer);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Viewer);

fn state_from_parts(parts: &Parts) -> Result<HttpState, HttpError> {
    parts
        .extensions
        .get::<HttpState>()
        .cloned()
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })
}

fn resolve_viewer(parts: &Parts, state: &HttpState) -> Result<Viewer, HttpError> {
    let headers = &state.identity_headers;

    let Some(raw_user) = parts.headers.get(headers.user.as_str()) else {
        return Ok(Viewer::Anonymous);
    };

    let user = raw_user.to_str().map_err(|_| {
        HttpError::from_error(ApplicationError::unauthenticated(
            "identity header is not valid text",
        ))
    })?;
    let username = Username::new(user).map_err(|_| {
        HttpError::from_error(ApplicationError::unauthenticated("identity header is empty"))
    })?;

    // Authenticated identities moderate by default; a deployment narrows
    // this by sending an explicit author role.
    let role = match parts.headers.get(headers.role.as_str()) {
        None => Role::default(),
        Some(raw_role) => raw_role
            .to_str()
            .ok()
            .and_then(|value| value.parse::<Role>().ok())
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthenticated("unknown role header"))
            })?,
    };

    Ok(Viewer::Authenticated(AuthenticatedViewer::new(
        username, role,
    )))
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = state_from_parts(parts)?;
        resolve_viewer(parts, &app_state).map(Self)
    }
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = state_from_parts(parts)?;
        match resolve_viewer(parts, &app_state)? {
            Viewer::Authenticated(viewer) => Ok(Self(viewer)),
            Viewer::Anonymous => Err(HttpError::from_error(ApplicationError::unauthenticated(
                "login required",
            ))),
        }
    }
}
