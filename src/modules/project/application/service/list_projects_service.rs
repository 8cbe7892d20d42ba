use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::ListProjectsUseCase;
use crate::modules::project::application::ports::outgoing::project_store::{
    ProjectStore, StoreError,
};
use crate::modules::project::domain::entities::Project;
use crate::shared::retry::{with_retry, RetryPolicy};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ListProjectsService<S>
where
    S: ProjectStore,
{
    store: Arc<S>,
    policy: RetryPolicy,
}

impl<S> ListProjectsService<S>
where
    S: ProjectStore,
{
    pub fn new(store: Arc<S>, policy: RetryPolicy) -> Self {
        Self { store, policy }
    }
}

#[async_trait]
impl<S> ListProjectsUseCase for ListProjectsService<S>
where
    S: ProjectStore,
{
    async fn execute(&self) -> Result<Vec<Project>, StoreError> {
        with_retry(self.policy, || self.store.list()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::modules::project::domain::entities::ProjectDraft;

    /// Store stub that pops one scripted outcome per `list()` call.
    struct ScriptedStore {
        outcomes: Mutex<VecDeque<Result<Vec<Project>, StoreError>>>,
    }

    impl ScriptedStore {
        fn new(outcomes: Vec<Result<Vec<Project>, StoreError>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
            }
        }
    }

    #[async_trait]
    impl ProjectStore for ScriptedStore {
        async fn list(&self) -> Result<Vec<Project>, StoreError> {
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .expect("script exhausted")
        }

        async fn get(&self, _id: &str) -> Result<Project, StoreError> {
            unimplemented!("not needed for list tests")
        }

        async fn create(&self, _draft: ProjectDraft) -> Result<Project, StoreError> {
            unimplemented!("not needed for list tests")
        }

        async fn update(&self, _id: &str, _draft: ProjectDraft) -> Result<Project, StoreError> {
            unimplemented!("not needed for list tests")
        }

        async fn toggle_favorite(&self, _id: &str) -> Result<Project, StoreError> {
            unimplemented!("not needed for list tests")
        }

        async fn delete(&self, _id: &str) -> Result<(), StoreError> {
            unimplemented!("not needed for list tests")
        }
    }

    fn unavailable() -> StoreError {
        StoreError::ServiceUnavailable(
            "Failed to fetch projects. The server is temporarily unavailable.".to_string(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn retries_transient_list_failures_transparently() {
        let store = Arc::new(ScriptedStore::new(vec![
            Err(unavailable()),
            Err(unavailable()),
            Ok(vec![]),
        ]));
        let service = ListProjectsService::new(store.clone(), RetryPolicy::default());

        let res = service.execute().await;

        assert_eq!(res, Ok(vec![]));
        assert!(store.outcomes.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn forwards_the_last_error_after_budget_exhaustion() {
        let store = Arc::new(ScriptedStore::new(vec![
            Err(unavailable()),
            Err(unavailable()),
            Err(unavailable()),
        ]));
        let service = ListProjectsService::new(store, RetryPolicy::default());

        let res = service.execute().await;

        assert_eq!(res, Err(unavailable()));
    }
}
