pub mod modules;
pub mod shared;

pub use modules::project;

use std::sync::Arc;

use crate::project::adapter::outgoing::simulated_store::{
    seed_projects, SimulatedProjectStore, SimulationProfile,
};
use crate::project::adapter::outgoing::thread_rng_fault_source::ThreadRngFaultSource;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectUseCase, ListProjectsUseCase,
    ToggleFavoriteUseCase, UpdateProjectUseCase,
};
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectService, ListProjectsService,
    ProjectSync, ToggleFavoriteService, UpdateProjectService,
};
use crate::shared::retry::RetryPolicy;

/// One store instance, the executor-wrapped use cases around it, and the
/// synchronizer — constructed once per process and injected everywhere.
#[derive(Clone)]
pub struct AppState {
    pub list_projects: Arc<dyn ListProjectsUseCase>,
    pub get_project: Arc<dyn GetProjectUseCase>,
    pub create_project: Arc<dyn CreateProjectUseCase>,
    pub update_project: Arc<dyn UpdateProjectUseCase>,
    pub toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
    pub delete_project: Arc<dyn DeleteProjectUseCase>,
    pub sync: Arc<ProjectSync>,
}

impl AppState {
    pub fn new() -> Self {
        let store = Arc::new(SimulatedProjectStore::with_seed(
            ThreadRngFaultSource,
            SimulationProfile::default(),
            seed_projects(),
        ));
        let policy = RetryPolicy::default();

        let list_projects: Arc<dyn ListProjectsUseCase> =
            Arc::new(ListProjectsService::new(store.clone(), policy));
        let sync = ProjectSync::new(list_projects.clone());

        Self {
            list_projects,
            get_project: Arc::new(GetProjectService::new(store.clone(), policy)),
            create_project: Arc::new(CreateProjectService::new(store.clone(), policy)),
            update_project: Arc::new(UpdateProjectService::new(store.clone(), policy)),
            toggle_favorite: Arc::new(ToggleFavoriteService::new(store.clone(), policy)),
            delete_project: Arc::new(DeleteProjectService::new(store, policy)),
            sync,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
