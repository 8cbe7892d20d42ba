use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_store::StoreError;
use crate::modules::project::domain::entities::Project;

/// Fetch the full project collection. Errors forward the store taxonomy
/// unchanged so the boundary keeps the status code and retryability flag.
#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, StoreError>;
}
