use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{
        AttachPartnerUserRequest, CreatePartnerRequest, PartnerPatch, PartnerSearchParams,
        UpdatePartnerStatusRequest,
    },
};

#[get("/api/partners")]
pub async fn list_partners(
    state: web::Data<Arc<AppState>>,
    params: web::Query<PartnerSearchParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let params = params.into_inner();
    let response = state
        .partner_service
        .list_partners(params.q.clone(), params.offset(), params.limit())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/partners")]
pub async fn create_partner(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreatePartnerRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let partner = state
        .partner_service
        .create_partner(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(partner))
}

#[get("/api/partners/{id}")]
pub async fn get_partner(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let partner = state.partner_service.get_partner(&id).await?;
    Ok(HttpResponse::Ok().json(partner))
}

#[put("/api/partners/{id}")]
pub async fn update_partner(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    patch: web::Json<PartnerPatch>,
) -> Result<HttpResponse, AppError> {
    patch.validate()?;

    let partner = state
        .partner_service
        .update_partner(&id, patch.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(partner))
}

#[put("/api/partners/{id}/status")]
pub async fn update_partner_status(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<UpdatePartnerStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let partner = state
        .partner_service
        .update_status(&id, request.into_inner().status)
        .await?;
    Ok(HttpResponse::Ok().json(partner))
}

#[delete("/api/partners/{id}")]
pub async fn delete_partner(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.partner_service.delete_partner(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/api/partners/{id}/users")]
pub async fn attach_partner_user(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<AttachPartnerUserRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let partner = state
        .partner_service
        .attach_user(&id, &request.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(partner))
}

#[delete("/api/partners/{id}/users/{user_id}")]
pub async fn detach_partner_user(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (id, user_id) = path.into_inner();
    let partner = state.partner_service.detach_user(&id, &user_id).await?;
    Ok(HttpResponse::Ok().json(partner))
}
