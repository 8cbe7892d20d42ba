// src/modules/project/adapter/outgoing/simulated_store.rs

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::modules::project::application::ports::outgoing::fault_source::{
    FaultSource, LatencyWindow,
};
use crate::modules::project::application::ports::outgoing::project_store::{
    ProjectStore, StoreError,
};
use crate::modules::project::domain::entities::{Project, ProjectDraft};

const NOT_FOUND: &str = "Project not found";
const INVALID_DATA: &str = "Invalid project data. Please fill in all required fields.";
const DUPLICATE_ID: &str = "A project with this ID already exists.";
const LIST_UNAVAILABLE: &str = "Failed to fetch projects. The server is temporarily unavailable.";
const GET_UNAVAILABLE: &str = "Failed to fetch project details. Please try again later.";
const CREATE_UNAVAILABLE: &str = "Failed to create project. Please try again later.";
const UPDATE_UNAVAILABLE: &str = "Failed to update project. Please try again later.";
const TOGGLE_UNAVAILABLE: &str = "Failed to update favorite status. Please try again.";
const DELETE_UNAVAILABLE: &str = "Failed to delete project. Please try again later.";

//
// ──────────────────────────────────────────────────────────
// Simulation profile
// ──────────────────────────────────────────────────────────
//

/// Latency window and fault probability for one operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpProfile {
    pub latency: LatencyWindow,
    pub fault_probability: f64,
}

impl OpProfile {
    pub const fn new(min_ms: u64, max_ms: u64, fault_probability: f64) -> Self {
        Self {
            latency: LatencyWindow::new(min_ms, max_ms),
            fault_probability,
        }
    }
}

/// Per-operation simulation settings, injected at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationProfile {
    pub list: OpProfile,
    pub get: OpProfile,
    pub create: OpProfile,
    pub update: OpProfile,
    pub toggle_favorite: OpProfile,
    pub delete: OpProfile,
}

impl Default for SimulationProfile {
    fn default() -> Self {
        Self {
            list: OpProfile::new(800, 2000, 0.05),
            get: OpProfile::new(500, 1500, 0.10),
            create: OpProfile::new(1000, 2500, 0.10),
            update: OpProfile::new(1000, 2000, 0.10),
            toggle_favorite: OpProfile::new(500, 1500, 0.05),
            delete: OpProfile::new(800, 2000, 0.10),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Store
// ──────────────────────────────────────────────────────────
//

/// In-memory backend that behaves like a flaky remote service: every
/// operation sleeps a sampled latency, then rolls for an injected transient
/// failure before touching state.
///
/// The collection is replaced wholesale on every successful mutation; the
/// lock is only held across the non-async read/swap, never across an await.
/// Two concurrent operations on the same id therefore resolve in delay
/// completion order, last writer wins. That lost-update hazard is part of
/// the contract: callers needing atomicity across concurrent edits of one
/// id must serialize their own calls.
pub struct SimulatedProjectStore<F>
where
    F: FaultSource,
{
    projects: Mutex<Arc<Vec<Project>>>,
    faults: F,
    profile: SimulationProfile,
}

impl<F> SimulatedProjectStore<F>
where
    F: FaultSource,
{
    pub fn new(faults: F, profile: SimulationProfile) -> Self {
        Self::with_seed(faults, profile, Vec::new())
    }

    pub fn with_seed(faults: F, profile: SimulationProfile, seed: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(Arc::new(seed)),
            faults,
            profile,
        }
    }

    async fn latency(&self, op: &'static str, window: LatencyWindow) {
        let wait = self.faults.sample_latency(window);
        debug!(op, "simulated latency: {:?}", wait);
        tokio::time::sleep(wait).await;
    }

    fn roll_fault(
        &self,
        op: &'static str,
        probability: f64,
        message: &'static str,
    ) -> Result<(), StoreError> {
        if self.faults.should_fail(probability) {
            warn!(op, "injected transient failure");
            return Err(StoreError::ServiceUnavailable(message.to_string()));
        }
        Ok(())
    }

    fn snapshot(&self) -> Arc<Vec<Project>> {
        Arc::clone(&self.projects.lock().unwrap())
    }

    /// Atomic read-modify-replace: the closure sees the current collection
    /// and returns the replacement plus the operation's result.
    fn try_replace<T>(
        &self,
        apply: impl FnOnce(&[Project]) -> Result<(Vec<Project>, T), StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.projects.lock().unwrap();
        let (next, out) = apply(&guard)?;
        *guard = Arc::new(next);
        Ok(out)
    }
}

#[async_trait]
impl<F> ProjectStore for SimulatedProjectStore<F>
where
    F: FaultSource,
{
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        self.latency("list", self.profile.list.latency).await;
        self.roll_fault("list", self.profile.list.fault_probability, LIST_UNAVAILABLE)?;

        let snapshot = self.snapshot();
        debug!(count = snapshot.len(), "returning project snapshot");
        Ok(snapshot.as_ref().clone())
    }

    async fn get(&self, id: &str) -> Result<Project, StoreError> {
        self.latency("get", self.profile.get.latency).await;
        self.roll_fault("get", self.profile.get.fault_probability, GET_UNAVAILABLE)?;

        self.snapshot()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(NOT_FOUND.to_string()))
    }

    async fn create(&self, draft: ProjectDraft) -> Result<Project, StoreError> {
        self.latency("create", self.profile.create.latency).await;

        if draft.id.is_empty() || draft.name.is_empty() || draft.description.is_empty() {
            return Err(StoreError::Validation(INVALID_DATA.to_string()));
        }
        if self.snapshot().iter().any(|p| p.id == draft.id) {
            return Err(StoreError::Conflict(DUPLICATE_ID.to_string()));
        }
        self.roll_fault(
            "create",
            self.profile.create.fault_probability,
            CREATE_UNAVAILABLE,
        )?;

        self.try_replace(|projects| {
            // Re-checked under the lock: a concurrent create may have won
            // the id while this call was sleeping on the fault roll side.
            if projects.iter().any(|p| p.id == draft.id) {
                return Err(StoreError::Conflict(DUPLICATE_ID.to_string()));
            }
            let created = Project::from_draft(draft.clone());
            let mut next = projects.to_vec();
            next.push(created.clone());
            Ok((next, created))
        })
    }

    async fn update(&self, id: &str, draft: ProjectDraft) -> Result<Project, StoreError> {
        self.latency("update", self.profile.update.latency).await;

        if draft.name.is_empty() || draft.description.is_empty() {
            return Err(StoreError::Validation(INVALID_DATA.to_string()));
        }
        self.roll_fault(
            "update",
            self.profile.update.fault_probability,
            UPDATE_UNAVAILABLE,
        )?;

        self.try_replace(|projects| {
            let index = projects
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| StoreError::NotFound(NOT_FOUND.to_string()))?;
            let merged = projects[index].merged_with(draft.clone());
            let mut next = projects.to_vec();
            next[index] = merged.clone();
            Ok((next, merged))
        })
    }

    async fn toggle_favorite(&self, id: &str) -> Result<Project, StoreError> {
        self.latency("toggle_favorite", self.profile.toggle_favorite.latency)
            .await;
        self.roll_fault(
            "toggle_favorite",
            self.profile.toggle_favorite.fault_probability,
            TOGGLE_UNAVAILABLE,
        )?;

        self.try_replace(|projects| {
            let index = projects
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| StoreError::NotFound(NOT_FOUND.to_string()))?;
            let mut toggled = projects[index].clone();
            toggled.is_favorite = !toggled.is_favorite;
            let mut next = projects.to_vec();
            next[index] = toggled.clone();
            Ok((next, toggled))
        })
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.latency("delete", self.profile.delete.latency).await;
        self.roll_fault(
            "delete",
            self.profile.delete.fault_probability,
            DELETE_UNAVAILABLE,
        )?;

        self.try_replace(|projects| {
            if !projects.iter().any(|p| p.id == id) {
                return Err(StoreError::NotFound(NOT_FOUND.to_string()));
            }
            let next = projects.iter().filter(|p| p.id != id).cloned().collect();
            Ok((next, ()))
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Seed data
// ──────────────────────────────────────────────────────────
//

/// The working set a fresh process starts with.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "project_a".to_string(),
            name: "Project A".to_string(),
            description:
                "Project A Description: Lorem ipsum dolor sit amet, consectetur adipiscing elit."
                    .to_string(),
            start_date: seed_date(2025, 1, 1),
            end_date: seed_date(2025, 12, 31),
            project_manager: "John Doe".to_string(),
            is_favorite: true,
        },
        Project {
            id: "project_b".to_string(),
            name: "Project B".to_string(),
            description: "Project B Description".to_string(),
            start_date: seed_date(2025, 1, 1),
            end_date: seed_date(2025, 12, 31),
            project_manager: "John Doe".to_string(),
            is_favorite: true,
        },
        Project {
            id: "project_c".to_string(),
            name: "Project C".to_string(),
            description: "Project C Description".to_string(),
            start_date: seed_date(2025, 1, 1),
            end_date: seed_date(2025, 12, 31),
            project_manager: "John Doe".to_string(),
            is_favorite: false,
        },
    ]
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}
