use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_store::StoreError;
use crate::modules::project::domain::entities::Project;

#[async_trait]
pub trait GetProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Project, StoreError>;
}
