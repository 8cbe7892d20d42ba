// src/modules/project/application/ports/outgoing/project_store.rs

use async_trait::async_trait;

use crate::modules::project::domain::entities::{Project, ProjectDraft};
use crate::shared::retry::Retryable;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Backend error taxonomy. Only `ServiceUnavailable` is worth retrying;
/// the other kinds will not change on a re-attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Rejected input (empty required fields).
    #[error("{0}")]
    Validation(String),

    /// A record with the requested id already exists.
    #[error("{0}")]
    Conflict(String),

    /// No record with the requested id.
    #[error("{0}")]
    NotFound(String),

    /// Transient backend failure.
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl StoreError {
    /// Status code for the boundary layer.
    pub fn status(&self) -> u16 {
        match self {
            StoreError::Validation(_) => 400,
            StoreError::NotFound(_) => 404,
            StoreError::Conflict(_) => 409,
            StoreError::ServiceUnavailable(_) => 503,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::ServiceUnavailable(_))
    }
}

impl Retryable for StoreError {
    fn is_retryable(&self) -> bool {
        StoreError::is_retryable(self)
    }
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// The backend holding the authoritative project collection.
///
/// Callers never reach an implementation directly: every call goes through
/// the retry executor in the application services.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Snapshot copy of the full collection.
    async fn list(&self) -> Result<Vec<Project>, StoreError>;

    async fn get(&self, id: &str) -> Result<Project, StoreError>;

    /// Appends a new record with `is_favorite = false`.
    async fn create(&self, draft: ProjectDraft) -> Result<Project, StoreError>;

    /// Replaces the record's fields from the draft, preserving the id and
    /// the favorite flag, and returns the merged record.
    async fn update(&self, id: &str, draft: ProjectDraft) -> Result<Project, StoreError>;

    async fn toggle_favorite(&self, id: &str) -> Result<Project, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
