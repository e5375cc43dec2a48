// src/domain/viewer.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rights attached to an authenticated identity. Article authoring is open
/// to every authenticated viewer; comment moderation is a distinct right so
/// deployments can withhold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Moderator,
    Author,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Moderator => "moderator",
            Role::Author => "author",
        }
    }

    pub fn can_moderate_comments(&self) -> bool {
        matches!(self, Role::Moderator)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Moderator
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moderator" => Ok(Role::Moderator),
            "author" => Ok(Role::Author),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedViewer {
    pub username: Username,
    pub role: Role,
}

impl AuthenticatedViewer {
    pub fn new(username: Username, role: Role) -> Self {
        Self { username, role }
    }
}

/// The identity (or absence thereof) making the current request. Resolved
/// once at the edge and threaded through every policy decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Authenticated(AuthenticatedViewer),
}

impl Viewer {
    pub fn authenticated(&self) -> Option<&AuthenticatedViewer> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Authenticated(viewer) => Some(viewer),
        }
    }

    pub fn username(&self) -> Option<&Username> {
        self.authenticated().map(|viewer| &viewer.username)
    }
}

impl From<AuthenticatedViewer> for Viewer {
    fn from(value: AuthenticatedViewer) -> Self {
        Viewer::Authenticated(value)
    }
}
