use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{
        CreateTeacherRequest, ExamAttemptPatch, PaginationParams, ScheduleExamRequest,
        TeacherFilterParams, TeacherPatch,
    },
};

#[get("/api/teachers")]
pub async fn list_teachers(
    state: web::Data<Arc<AppState>>,
    filters: web::Query<TeacherFilterParams>,
    pagination: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    pagination.validate()?;

    let pagination = pagination.into_inner();
    let response = state
        .teacher_service
        .list_teachers(filters.into_inner(), pagination.offset(), pagination.limit())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/teachers")]
pub async fn create_teacher(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateTeacherRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let response = state
        .teacher_service
        .create_teacher(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(response))
}

/// The teacher detail view. Fetching it also runs the lapse sweep, so any
/// attempt whose deadline has passed comes back already closed.
#[get("/api/teachers/{id}")]
pub async fn get_teacher(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.exam_schedule_service.reconcile_and_fetch(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[put("/api/teachers/{id}")]
pub async fn update_teacher(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<TeacherPatch>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let response = state
        .teacher_service
        .update_teacher(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/api/teachers/{id}")]
pub async fn delete_teacher(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.teacher_service.delete_teacher(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/api/teachers/{id}/exams")]
pub async fn schedule_exam(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<ScheduleExamRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let attempt = state
        .exam_schedule_service
        .schedule(&id, &request.exam_id, request.start_time)
        .await?;
    Ok(HttpResponse::Created().json(attempt))
}

#[put("/api/exam-attempts/{id}")]
pub async fn reschedule_attempt(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    patch: web::Json<ExamAttemptPatch>,
) -> Result<HttpResponse, AppError> {
    let attempt = state
        .exam_schedule_service
        .reschedule(&id, patch.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(attempt))
}

#[delete("/api/exam-attempts/{id}")]
pub async fn cancel_attempt(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let outcome = state.exam_schedule_service.cancel(&id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "outcome": outcome })))
}
