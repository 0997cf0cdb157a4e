//! Core types for Showreel

pub mod media;
pub mod portfolio;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

pub use media::{MediaKind, MediaRef, SessionHandle};
pub use portfolio::{EmailParts, NameDisplay, PortfolioDocument, NAME_PLACEHOLDER};

/// Caption given to a freshly added project
pub const DEFAULT_PROJECT_TITLE: &str = "Nuovo Progetto";

/// Unique identifier for a video project
///
/// Opaque to everything but equality. New ids are ULID strings, but ids read
/// back from storage may have any shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Create a new ProjectId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new().to_string().to_lowercase())
    }

    /// Generate an id that collides with none of `taken`
    pub fn unique_among<'a>(taken: impl IntoIterator<Item = &'a ProjectId>) -> Self {
        let taken: HashSet<&ProjectId> = taken.into_iter().collect();
        loop {
            let candidate = Self::new();
            if !taken.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Wrap an existing id string
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A video in the portfolio gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoProject {
    /// Unique identifier for the project
    pub id: ProjectId,
    /// Playable video source
    pub url: MediaRef,
    /// User-editable caption
    pub title: String,
}

impl VideoProject {
    /// Create a project with the default caption
    pub fn new(id: ProjectId, url: MediaRef) -> Self {
        Self {
            id,
            url,
            title: DEFAULT_PROJECT_TITLE.to_string(),
        }
    }
}
