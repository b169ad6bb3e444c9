use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Component,
        dto::request::{ComponentPatch, CreateComponentRequest},
    },
    repositories::ComponentRepository,
};

pub struct ComponentService {
    repository: Arc<dyn ComponentRepository>,
}

impl ComponentService {
    pub fn new(repository: Arc<dyn ComponentRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_components(&self, project_id: &str) -> AppResult<Vec<Component>> {
        self.repository.find_by_project(project_id).await
    }

    pub async fn create_component(
        &self,
        project_id: &str,
        request: CreateComponentRequest,
    ) -> AppResult<Component> {
        let mut component = Component::new(project_id, &request.name, &request.color);
        component.description = request.description;

        self.repository.create(component).await
    }

    /// Fetches a component, refusing access when it belongs to a different
    /// project than the one in the request path.
    pub async fn get_component(&self, project_id: &str, id: &str) -> AppResult<Component> {
        let component = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Component with id '{}' not found", id)))?;

        if component.project_id != project_id {
            return Err(AppError::Conflict(format!(
                "component '{}' does not belong to project '{}'",
                id, project_id
            )));
        }

        Ok(component)
    }

    pub async fn update_component(
        &self,
        project_id: &str,
        id: &str,
        patch: ComponentPatch,
    ) -> AppResult<Component> {
        let mut component = self.get_component(project_id, id).await?;

        if patch.is_empty() {
            return Err(AppError::NothingToUpdate(format!(
                "no fields given for component '{}'",
                id
            )));
        }

        patch.apply(&mut component);
        self.repository.update(component).await
    }

    pub async fn delete_component(&self, project_id: &str, id: &str) -> AppResult<Component> {
        let component = self.get_component(project_id, id).await?;
        self.repository.delete(id).await?;
        Ok(component)
    }
}
