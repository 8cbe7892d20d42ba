mod create_project;
mod delete_project;
mod get_project;
mod list_projects;
mod toggle_favorite;
mod update_project;

pub use create_project::CreateProjectUseCase;
pub use delete_project::DeleteProjectUseCase;
pub use get_project::GetProjectUseCase;
pub use list_projects::ListProjectsUseCase;
pub use toggle_favorite::ToggleFavoriteUseCase;
pub use update_project::UpdateProjectUseCase;
