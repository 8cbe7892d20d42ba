use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectUseCase;
use crate::modules::project::application::ports::outgoing::project_store::{
    ProjectStore, StoreError,
};
use crate::shared::retry::{with_retry, RetryPolicy};

pub struct DeleteProjectService<S>
where
    S: ProjectStore,
{
    store: Arc<S>,
    policy: RetryPolicy,
}

impl<S> DeleteProjectService<S>
where
    S: ProjectStore,
{
    pub fn new(store: Arc<S>, policy: RetryPolicy) -> Self {
        Self { store, policy }
    }
}

#[async_trait]
impl<S> DeleteProjectUseCase for DeleteProjectService<S>
where
    S: ProjectStore,
{
    async fn execute(&self, id: &str) -> Result<(), StoreError> {
        with_retry(self.policy, || self.store.delete(id)).await
    }
}
