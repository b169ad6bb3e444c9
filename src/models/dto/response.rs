use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Exam, ExamAttempt, Partner, Teacher};

#[derive(Debug, Clone, Serialize)]
pub struct TeacherDto {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub document: String,
    pub country_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Teacher> for TeacherDto {
    fn from(teacher: Teacher) -> Self {
        TeacherDto {
            id: teacher.id,
            full_name: format!("{} {}", teacher.first_name, teacher.last_name),
            email: teacher.email,
            document: teacher.document,
            country_id: teacher.country_id,
            created_at: teacher.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeacherListResponse {
    pub teachers: Vec<TeacherDto>,
    pub total: i64,
    /// True when the listing was narrowed by lookup filters.
    pub filtered: bool,
}

/// The reconciled teacher detail view: attempts after the lapse sweep plus
/// the exams the teacher may still schedule.
#[derive(Debug, Serialize)]
pub struct TeacherDetailResponse {
    pub teacher: TeacherDto,
    pub attempts: Vec<ExamAttempt>,
    pub eligible_exams: Vec<Exam>,
}

#[derive(Debug, Serialize)]
pub struct PartnerListResponse {
    pub partners: Vec<Partner>,
    pub total: i64,
}
