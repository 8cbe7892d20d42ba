use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::GetProjectUseCase;
use crate::modules::project::application::ports::outgoing::project_store::{
    ProjectStore, StoreError,
};
use crate::modules::project::domain::entities::Project;
use crate::shared::retry::{with_retry, RetryPolicy};

pub struct GetProjectService<S>
where
    S: ProjectStore,
{
    store: Arc<S>,
    policy: RetryPolicy,
}

impl<S> GetProjectService<S>
where
    S: ProjectStore,
{
    pub fn new(store: Arc<S>, policy: RetryPolicy) -> Self {
        Self { store, policy }
    }
}

#[async_trait]
impl<S> GetProjectUseCase for GetProjectService<S>
where
    S: ProjectStore,
{
    async fn execute(&self, id: &str) -> Result<Project, StoreError> {
        with_retry(self.policy, || self.store.get(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    use crate::modules::project::domain::entities::ProjectDraft;

    mock! {
        Store {}

        #[async_trait]
        impl ProjectStore for Store {
            async fn list(&self) -> Result<Vec<Project>, StoreError>;
            async fn get(&self, id: &str) -> Result<Project, StoreError>;
            async fn create(&self, draft: ProjectDraft) -> Result<Project, StoreError>;
            async fn update(&self, id: &str, draft: ProjectDraft) -> Result<Project, StoreError>;
            async fn toggle_favorite(&self, id: &str) -> Result<Project, StoreError>;
            async fn delete(&self, id: &str) -> Result<(), StoreError>;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn transient_failures_consume_the_whole_budget() {
        let mut store = MockStore::new();
        store.expect_get().times(3).returning(|_| {
            Err(StoreError::ServiceUnavailable(
                "Failed to fetch project details. Please try again later.".to_string(),
            ))
        });
        let service = GetProjectService::new(Arc::new(store), RetryPolicy::default());

        let res = service.execute("project_a").await;

        assert!(matches!(res, Err(StoreError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn missing_record_is_not_retried() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(StoreError::NotFound("Project not found".to_string())));
        let service = GetProjectService::new(Arc::new(store), RetryPolicy::default());

        let res = service.execute("missing").await;

        assert_eq!(res, Err(StoreError::NotFound("Project not found".into())));
    }
}
