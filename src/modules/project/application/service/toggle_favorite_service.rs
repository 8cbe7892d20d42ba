use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::ToggleFavoriteUseCase;
use crate::modules::project::application::ports::outgoing::project_store::{
    ProjectStore, StoreError,
};
use crate::modules::project::domain::entities::Project;
use crate::shared::retry::{with_retry, RetryPolicy};

pub struct ToggleFavoriteService<S>
where
    S: ProjectStore,
{
    store: Arc<S>,
    policy: RetryPolicy,
}

impl<S> ToggleFavoriteService<S>
where
    S: ProjectStore,
{
    pub fn new(store: Arc<S>, policy: RetryPolicy) -> Self {
        Self { store, policy }
    }
}

#[async_trait]
impl<S> ToggleFavoriteUseCase for ToggleFavoriteService<S>
where
    S: ProjectStore,
{
    async fn execute(&self, id: &str) -> Result<Project, StoreError> {
        with_retry(self.policy, || self.store.toggle_favorite(id)).await
    }
}
