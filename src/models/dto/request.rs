use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{Component, PartnerStatus, Project, Teacher};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}

/// Request to put an exam on a teacher's calendar. The exam select on the
/// admin form submits the literal string "null" when nothing is chosen, so
/// `exam_id` is carried as-is and checked by the scheduler.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScheduleExamRequest {
    pub exam_id: String,
    pub start_time: DateTime<Utc>,
}

/// Partial update for a scheduled attempt. `start_time` is the only field a
/// caller may change; everything else is owned by grading or the sweep.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExamAttemptPatch {
    pub start_time: Option<DateTime<Utc>>,
}

impl ExamAttemptPatch {
    pub fn is_empty(&self) -> bool {
        self.start_time.is_none()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeacherRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(length(min = 1))]
    pub document_type_id: String,

    #[validate(length(min = 1, max = 50))]
    pub document: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub country_id: String,

    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TeacherPatch {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    pub document_type_id: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub document: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub country_id: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

impl TeacherPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.document_type_id.is_none()
            && self.document.is_none()
            && self.email.is_none()
            && self.country_id.is_none()
            && self.phone.is_none()
            && self.birth_date.is_none()
            && self.gender.is_none()
    }

    pub fn apply(&self, teacher: &mut Teacher) {
        if let Some(first_name) = &self.first_name {
            teacher.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            teacher.last_name = last_name.clone();
        }
        if let Some(document_type_id) = &self.document_type_id {
            teacher.document_type_id = document_type_id.clone();
        }
        if let Some(document) = &self.document {
            teacher.document = document.clone();
        }
        if let Some(email) = &self.email {
            teacher.email = email.clone();
        }
        if let Some(country_id) = &self.country_id {
            teacher.country_id = country_id.clone();
        }
        if let Some(phone) = &self.phone {
            teacher.phone = Some(phone.clone());
        }
        if let Some(birth_date) = self.birth_date {
            teacher.birth_date = Some(birth_date);
        }
        if let Some(gender) = &self.gender {
            teacher.gender = Some(gender.clone());
        }
        teacher.modified_at = Some(Utc::now());
    }
}

/// Exact-match lookup filters for the teacher index. Any filter present
/// switches the listing into single-record lookup mode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeacherFilterParams {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub document: Option<String>,
    pub email: Option<String>,
}

impl TeacherFilterParams {
    pub fn has_filters(&self) -> bool {
        self.name.is_some()
            || self.last_name.is_some()
            || self.document.is_some()
            || self.email.is_some()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePartnerRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1))]
    pub document_type_id: String,

    #[validate(length(min = 1, max = 50))]
    pub document: String,

    #[validate(length(min = 1, max = 200))]
    pub address: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 1))]
    pub country_id: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PartnerPatch {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub document_type_id: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub document: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub address: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub country_id: Option<String>,
}

impl PartnerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.document_type_id.is_none()
            && self.document.is_none()
            && self.address.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.country_id.is_none()
    }

    pub fn apply(&self, partner: &mut crate::models::domain::Partner) {
        if let Some(name) = &self.name {
            partner.name = name.to_uppercase();
        }
        if let Some(document_type_id) = &self.document_type_id {
            partner.document_type_id = document_type_id.clone();
        }
        if let Some(document) = &self.document {
            partner.document = document.clone();
        }
        if let Some(address) = &self.address {
            partner.address = address.to_uppercase();
        }
        if let Some(email) = &self.email {
            partner.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            partner.phone = Some(phone.clone());
        }
        if let Some(country_id) = &self.country_id {
            partner.country_id = country_id.clone();
        }
        partner.modified_at = Some(Utc::now());
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePartnerStatusRequest {
    pub status: PartnerStatus,
}

/// Search over partner name and document, combined with pagination.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PartnerSearchParams {
    pub q: Option<String>,

    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl PartnerSearchParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttachPartnerUserRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 250))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 10))]
    pub color: String,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub private: Option<bool>,
    pub status_id: i16,
    pub budget: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProjectPatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 250))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 10))]
    pub color: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub private: Option<bool>,
    pub status_id: Option<i16>,
    pub budget: Option<f64>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.color.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.private.is_none()
            && self.status_id.is_none()
            && self.budget.is_none()
    }

    pub fn apply(&self, project: &mut Project) {
        if let Some(title) = &self.title {
            project.title = title.clone();
        }
        if let Some(description) = &self.description {
            project.description = Some(description.clone());
        }
        if let Some(color) = &self.color {
            project.color = color.clone();
        }
        if let Some(start_date) = self.start_date {
            project.start_date = Some(start_date);
        }
        if let Some(end_date) = self.end_date {
            project.end_date = Some(end_date);
        }
        if let Some(private) = self.private {
            project.private = private;
        }
        if let Some(status_id) = self.status_id {
            project.status_id = status_id;
        }
        if let Some(budget) = self.budget {
            project.budget = Some(budget);
        }
        project.modified_at = Some(Utc::now());
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComponentRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 15))]
    pub color: String,

    #[validate(length(max = 200))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ComponentPatch {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 15))]
    pub color: Option<String>,

    #[validate(length(max = 200))]
    pub description: Option<String>,
}

impl ComponentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none() && self.description.is_none()
    }

    pub fn apply(&self, component: &mut Component) {
        if let Some(name) = &self.name {
            component.name = name.clone();
        }
        if let Some(color) = &self.color {
            component.color = color.clone();
        }
        if let Some(description) = &self.description {
            component.description = Some(description.clone());
        }
        component.modified_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_valid_create_teacher_request() {
        let request = CreateTeacherRequest {
            first_name: "Maria".to_string(),
            last_name: "Gomez".to_string(),
            document_type_id: "cc".to_string(),
            document: "900123".to_string(),
            email: "maria@example.com".to_string(),
            country_id: "co".to_string(),
            phone: None,
            birth_date: None,
            gender: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_teacher_email() {
        let request = CreateTeacherRequest {
            first_name: "Maria".to_string(),
            last_name: "Gomez".to_string(),
            document_type_id: "cc".to_string(),
            document: "900123".to_string(),
            email: "not-an-email".to_string(),
            country_id: "co".to_string(),
            phone: None,
            birth_date: None,
            gender: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_negative_offset_is_rejected() {
        let params = PaginationParams {
            offset: Some(-1),
            limit: Some(20),
        };
        assert!(params.validate().is_err());

        let params = PartnerSearchParams {
            q: None,
            offset: Some(-1),
            limit: Some(20),
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_out_of_range_limit_is_rejected() {
        let params = PaginationParams {
            offset: Some(0),
            limit: Some(500),
        };
        assert!(params.validate().is_err());

        let params = PartnerSearchParams {
            q: None,
            offset: Some(0),
            limit: Some(0),
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_empty_patches_report_empty() {
        assert!(ExamAttemptPatch::default().is_empty());
        assert!(TeacherPatch::default().is_empty());
        assert!(ProjectPatch::default().is_empty());
        assert!(ComponentPatch::default().is_empty());
        assert!(PartnerPatch::default().is_empty());
    }

    #[test]
    fn test_project_patch_touches_only_present_fields() {
        let mut project = Project::new("owner-1", "Original", "#fff", 1);
        let patch = ProjectPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };

        patch.apply(&mut project);

        assert_eq!(project.title, "Renamed");
        assert_eq!(project.color, "#fff");
        assert_eq!(project.description, None);
    }

    #[test]
    fn test_partner_patch_uppercases_name_and_address() {
        let mut partner =
            crate::models::domain::Partner::new("OLD", "1", "900", "OLD ST", "a@b.co", "co");
        let patch = PartnerPatch {
            name: Some("new name".to_string()),
            address: Some("new st".to_string()),
            ..Default::default()
        };

        patch.apply(&mut partner);

        assert_eq!(partner.name, "NEW NAME");
        assert_eq!(partner.address, "NEW ST");
    }

    #[test]
    fn test_teacher_filters_detect_presence() {
        assert!(!TeacherFilterParams::default().has_filters());
        let filters = TeacherFilterParams {
            document: Some("900123".to_string()),
            ..Default::default()
        };
        assert!(filters.has_filters());
    }
}
