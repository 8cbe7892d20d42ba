use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_store::StoreError;
use crate::modules::project::domain::entities::{Project, ProjectDraft};

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, draft: ProjectDraft) -> Result<Project, StoreError>;
}
