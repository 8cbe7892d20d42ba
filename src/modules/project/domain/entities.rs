// src/modules/project/domain/entities.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked project. Records are immutable by convention: mutations go
/// through the store, which replaces the whole record in its slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Caller-assigned, unique, never changes after creation.
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub project_manager: String,
    pub is_favorite: bool,
}

/// Input shape for create/update: every `Project` field except the
/// favorite flag, which the store owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub project_manager: String,
}

impl Project {
    /// New record from a draft; favorites always start cleared.
    pub fn from_draft(draft: ProjectDraft) -> Self {
        Self {
            id: draft.id,
            name: draft.name,
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            project_manager: draft.project_manager,
            is_favorite: false,
        }
    }

    /// Merge a draft into this record. The id and the favorite flag are
    /// preserved; a draft cannot rename a record or touch favorites.
    pub fn merged_with(&self, draft: ProjectDraft) -> Self {
        Self {
            id: self.id.clone(),
            name: draft.name,
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            project_manager: draft.project_manager,
            is_favorite: self.is_favorite,
        }
    }
}
