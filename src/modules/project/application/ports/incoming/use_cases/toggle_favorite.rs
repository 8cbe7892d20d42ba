use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_store::StoreError;
use crate::modules::project::domain::entities::Project;

/// Flip a project's favorite flag. Collaborators re-invoke the
/// synchronizer's `refresh()` after success to reconcile the cache.
#[async_trait]
pub trait ToggleFavoriteUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Project, StoreError>;
}
