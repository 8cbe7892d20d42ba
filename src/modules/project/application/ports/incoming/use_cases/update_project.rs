use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_store::StoreError;
use crate::modules::project::domain::entities::{Project, ProjectDraft};

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str, draft: ProjectDraft) -> Result<Project, StoreError>;
}
