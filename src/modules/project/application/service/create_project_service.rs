use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::CreateProjectUseCase;
use crate::modules::project::application::ports::outgoing::project_store::{
    ProjectStore, StoreError,
};
use crate::modules::project::domain::entities::{Project, ProjectDraft};
use crate::shared::retry::{with_retry, RetryPolicy};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<S>
where
    S: ProjectStore,
{
    store: Arc<S>,
    policy: RetryPolicy,
}

impl<S> CreateProjectService<S>
where
    S: ProjectStore,
{
    pub fn new(store: Arc<S>, policy: RetryPolicy) -> Self {
        Self { store, policy }
    }
}

#[async_trait]
impl<S> CreateProjectUseCase for CreateProjectService<S>
where
    S: ProjectStore,
{
    async fn execute(&self, draft: ProjectDraft) -> Result<Project, StoreError> {
        with_retry(self.policy, || self.store.create(draft.clone())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct ConflictingStore {
        calls: AtomicU32,
    }

    #[async_trait]
    impl ProjectStore for ConflictingStore {
        async fn list(&self) -> Result<Vec<Project>, StoreError> {
            unimplemented!("not needed for create tests")
        }

        async fn get(&self, _id: &str) -> Result<Project, StoreError> {
            unimplemented!("not needed for create tests")
        }

        async fn create(&self, _draft: ProjectDraft) -> Result<Project, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Conflict(
                "A project with this ID already exists.".to_string(),
            ))
        }

        async fn update(&self, _id: &str, _draft: ProjectDraft) -> Result<Project, StoreError> {
            unimplemented!("not needed for create tests")
        }

        async fn toggle_favorite(&self, _id: &str) -> Result<Project, StoreError> {
            unimplemented!("not needed for create tests")
        }

        async fn delete(&self, _id: &str) -> Result<(), StoreError> {
            unimplemented!("not needed for create tests")
        }
    }

    fn sample_draft() -> ProjectDraft {
        ProjectDraft {
            id: "project_x".to_string(),
            name: "Project X".to_string(),
            description: "Project X Description".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            project_manager: "John Doe".to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_id_surfaces_immediately_without_retry() {
        let store = Arc::new(ConflictingStore {
            calls: AtomicU32::new(0),
        });
        let service = CreateProjectService::new(store.clone(), RetryPolicy::default());

        let res = service.execute(sample_draft()).await;

        assert!(matches!(res, Err(StoreError::Conflict(_))));
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }
}
