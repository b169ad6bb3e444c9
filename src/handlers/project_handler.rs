use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateProjectRequest, ProjectPatch},
};

#[get("/api/users/{owner_id}/projects")]
pub async fn list_projects(
    state: web::Data<Arc<AppState>>,
    owner_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let projects = state.project_service.list_projects(&owner_id).await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[post("/api/users/{owner_id}/projects")]
pub async fn create_project(
    state: web::Data<Arc<AppState>>,
    owner_id: web::Path<String>,
    request: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let project = state
        .project_service
        .create_project(&owner_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(project))
}

#[get("/api/users/{owner_id}/projects/{id}")]
pub async fn get_project(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (owner_id, id) = path.into_inner();
    let project = state.project_service.get_project(&owner_id, &id).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[put("/api/users/{owner_id}/projects/{id}")]
pub async fn update_project(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(String, String)>,
    patch: web::Json<ProjectPatch>,
) -> Result<HttpResponse, AppError> {
    patch.validate()?;

    let (owner_id, id) = path.into_inner();
    let project = state
        .project_service
        .update_project(&owner_id, &id, patch.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(project))
}

#[delete("/api/users/{owner_id}/projects/{id}")]
pub async fn delete_project(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (owner_id, id) = path.into_inner();
    let project = state.project_service.delete_project(&owner_id, &id).await?;
    Ok(HttpResponse::Ok().json(project))
}
