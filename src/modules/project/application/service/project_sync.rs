// src/modules/project/application/service/project_sync.rs

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::modules::project::application::ports::incoming::use_cases::ListProjectsUseCase;
use crate::modules::project::domain::entities::Project;

/// Automatic re-attempts of the initial load before giving up.
const MAX_LOAD_RETRIES: u32 = 3;

/// Linear backoff step between scheduled load retries.
const LOAD_RETRY_STEP: Duration = Duration::from_millis(1000);

#[derive(Default)]
struct SyncState {
    projects: Vec<Project>,
    is_loading: bool,
    last_error: Option<String>,
    load_retries: u32,
}

/// The single shared view of the project collection.
///
/// Caches the result of the executor-wrapped list operation and, while no
/// load has ever succeeded, schedules its own linearly backed-off retries
/// on top of the executor's exponential layer. Mutations are not cached:
/// collaborators call `refresh()` after a successful mutation to reconcile.
pub struct ProjectSync {
    list_projects: Arc<dyn ListProjectsUseCase>,
    state: Mutex<SyncState>,
    scheduled_retry: Mutex<Option<JoinHandle<()>>>,
}

impl ProjectSync {
    pub fn new(list_projects: Arc<dyn ListProjectsUseCase>) -> Arc<Self> {
        Arc::new(Self {
            list_projects,
            state: Mutex::new(SyncState::default()),
            scheduled_retry: Mutex::new(None),
        })
    }

    /// Re-load the cached collection.
    ///
    /// On failure before any load has ever succeeded, schedules up to
    /// `MAX_LOAD_RETRIES` further calls to itself, waiting `LOAD_RETRY_STEP`
    /// times the retry number between attempts. Once the budget is spent a
    /// manual call is required to try again.
    pub async fn refresh(self: Arc<Self>) {
        {
            let mut state = self.state.lock().unwrap();
            state.is_loading = true;
            state.last_error = None;
        }
        info!("refreshing project cache");

        match self.list_projects.execute().await {
            Ok(projects) => {
                let mut state = self.state.lock().unwrap();
                info!(count = projects.len(), "project cache refreshed");
                state.projects = projects;
                state.load_retries = 0;
                state.is_loading = false;
            }
            Err(err) => {
                warn!("project refresh failed: {}", err);
                let retry_in = {
                    let mut state = self.state.lock().unwrap();
                    state.last_error = Some(err.to_string());
                    state.is_loading = false;
                    if state.projects.is_empty() && state.load_retries < MAX_LOAD_RETRIES {
                        state.load_retries += 1;
                        Some(LOAD_RETRY_STEP * state.load_retries)
                    } else {
                        None
                    }
                };
                if let Some(delay) = retry_in {
                    self.schedule_retry(delay);
                }
            }
        }
    }

    fn schedule_retry(self: Arc<Self>, delay: Duration) {
        info!("scheduling load retry in {:?}", delay);
        let sync = Arc::clone(&self);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            sync.refresh().await;
        });
        *self.scheduled_retry.lock().unwrap() = Some(handle);
    }

    /// Snapshot of the cached collection.
    pub fn projects(&self) -> Vec<Project> {
        self.state.lock().unwrap().projects.clone()
    }

    /// The favorite subsequence of the cache, in collection order.
    pub fn favorite_projects(&self) -> Vec<Project> {
        self.state
            .lock()
            .unwrap()
            .projects
            .iter()
            .filter(|p| p.is_favorite)
            .cloned()
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().is_loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.lock().unwrap().last_error.clone()
    }

    fn take_scheduled_retry(&self) -> Option<JoinHandle<()>> {
        self.scheduled_retry.lock().unwrap().take()
    }
}

impl Drop for ProjectSync {
    fn drop(&mut self) {
        if let Some(handle) = self.scheduled_retry.lock().unwrap().take() {
            handle.abort();
        }
    }
}
