use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Teacher,
        dto::{
            request::{CreateTeacherRequest, TeacherFilterParams, TeacherPatch},
            response::{TeacherDto, TeacherListResponse},
        },
    },
    repositories::TeacherRepository,
};

pub struct TeacherService {
    repository: Arc<dyn TeacherRepository>,
}

impl TeacherService {
    pub fn new(repository: Arc<dyn TeacherRepository>) -> Self {
        Self { repository }
    }

    /// The teacher index. With filters present the listing collapses to a
    /// single exact-match lookup; otherwise it pages through the whole
    /// directory ordered by name.
    pub async fn list_teachers(
        &self,
        filters: TeacherFilterParams,
        offset: i64,
        limit: i64,
    ) -> AppResult<TeacherListResponse> {
        if filters.has_filters() {
            let teachers: Vec<TeacherDto> = self
                .repository
                .find_filtered(filters)
                .await?
                .into_iter()
                .map(TeacherDto::from)
                .collect();
            let total = teachers.len() as i64;

            return Ok(TeacherListResponse {
                teachers,
                total,
                filtered: true,
            });
        }

        let (teachers, total) = self.repository.find_page(offset, limit).await?;

        Ok(TeacherListResponse {
            teachers: teachers.into_iter().map(TeacherDto::from).collect(),
            total,
            filtered: false,
        })
    }

    pub async fn create_teacher(&self, request: CreateTeacherRequest) -> AppResult<TeacherDto> {
        let mut teacher = Teacher::new(
            &request.first_name,
            &request.last_name,
            &request.document_type_id,
            &request.document,
            &request.email,
            &request.country_id,
        );
        teacher.phone = request.phone;
        teacher.birth_date = request.birth_date;
        teacher.gender = request.gender;

        let created = self.repository.create(teacher).await?;
        Ok(TeacherDto::from(created))
    }

    pub async fn get_teacher(&self, id: &str) -> AppResult<Teacher> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Teacher with id '{}' not found", id)))
    }

    pub async fn update_teacher(&self, id: &str, patch: TeacherPatch) -> AppResult<TeacherDto> {
        if patch.is_empty() {
            return Err(AppError::NothingToUpdate(format!(
                "no fields given for teacher '{}'",
                id
            )));
        }

        let mut teacher = self.get_teacher(id).await?;
        patch.apply(&mut teacher);

        let updated = self.repository.update(teacher).await?;
        Ok(TeacherDto::from(updated))
    }

    pub async fn delete_teacher(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
