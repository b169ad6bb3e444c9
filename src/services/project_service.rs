use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Project,
        dto::request::{CreateProjectRequest, ProjectPatch},
    },
    repositories::ProjectRepository,
};

pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_projects(&self, owner_id: &str) -> AppResult<Vec<Project>> {
        self.repository.find_by_owner(owner_id).await
    }

    pub async fn create_project(
        &self,
        owner_id: &str,
        request: CreateProjectRequest,
    ) -> AppResult<Project> {
        let mut project = Project::new(owner_id, &request.title, &request.color, request.status_id);
        project.description = request.description;
        project.start_date = request.start_date;
        project.end_date = request.end_date;
        project.private = request.private.unwrap_or(false);
        project.budget = request.budget;

        self.repository.create(project).await
    }

    /// Fetches a project, refusing access when it does not belong to the
    /// given owner.
    pub async fn get_project(&self, owner_id: &str, id: &str) -> AppResult<Project> {
        let project = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project with id '{}' not found", id)))?;

        if project.owner_id != owner_id {
            return Err(AppError::Conflict(format!(
                "project '{}' does not belong to user '{}'",
                id, owner_id
            )));
        }

        Ok(project)
    }

    pub async fn update_project(
        &self,
        owner_id: &str,
        id: &str,
        patch: ProjectPatch,
    ) -> AppResult<Project> {
        let mut project = self.get_project(owner_id, id).await?;

        if patch.is_empty() {
            return Err(AppError::NothingToUpdate(format!(
                "no fields given for project '{}'",
                id
            )));
        }

        patch.apply(&mut project);
        self.repository.update(project).await
    }

    pub async fn delete_project(&self, owner_id: &str, id: &str) -> AppResult<Project> {
        let project = self.get_project(owner_id, id).await?;
        self.repository.delete(id).await?;
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::project_repository::MockProjectRepository;

    fn sample_project() -> Project {
        Project::new("owner-1", "Platform revamp", "#0a58ca", 1)
    }

    #[tokio::test]
    async fn foreign_project_access_is_a_conflict() {
        let mut repository = MockProjectRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(sample_project())));
        repository.expect_delete().never();

        let service = ProjectService::new(Arc::new(repository));
        let result = service.delete_project("intruder", "project-1").await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn empty_patch_is_rejected_before_touching_the_store() {
        let mut repository = MockProjectRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(sample_project())));
        repository.expect_update().never();

        let service = ProjectService::new(Arc::new(repository));
        let result = service
            .update_project("owner-1", "project-1", ProjectPatch::default())
            .await;

        assert!(matches!(result, Err(AppError::NothingToUpdate(_))));
    }
}
