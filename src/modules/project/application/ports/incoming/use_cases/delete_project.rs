use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_store::StoreError;

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), StoreError>;
}
