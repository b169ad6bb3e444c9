use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{ComponentPatch, CreateComponentRequest},
};

#[get("/api/projects/{project_id}/components")]
pub async fn list_components(
    state: web::Data<Arc<AppState>>,
    project_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let components = state.component_service.list_components(&project_id).await?;
    Ok(HttpResponse::Ok().json(components))
}

#[post("/api/projects/{project_id}/components")]
pub async fn create_component(
    state: web::Data<Arc<AppState>>,
    project_id: web::Path<String>,
    request: web::Json<CreateComponentRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let component = state
        .component_service
        .create_component(&project_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(component))
}

#[get("/api/projects/{project_id}/components/{id}")]
pub async fn get_component(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (project_id, id) = path.into_inner();
    let component = state
        .component_service
        .get_component(&project_id, &id)
        .await?;
    Ok(HttpResponse::Ok().json(component))
}

#[put("/api/projects/{project_id}/components/{id}")]
pub async fn update_component(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(String, String)>,
    patch: web::Json<ComponentPatch>,
) -> Result<HttpResponse, AppError> {
    patch.validate()?;

    let (project_id, id) = path.into_inner();
    let component = state
        .component_service
        .update_component(&project_id, &id, patch.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(component))
}

#[delete("/api/projects/{project_id}/components/{id}")]
pub async fn delete_component(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (project_id, id) = path.into_inner();
    let component = state
        .component_service
        .delete_component(&project_id, &id)
        .await?;
    Ok(HttpResponse::Ok().json(component))
}
