pub mod component_repository;
pub mod exam_attempt_repository;
pub mod exam_repository;
pub mod partner_repository;
pub mod project_repository;
pub mod teacher_repository;

pub use component_repository::{ComponentRepository, MongoComponentRepository};
pub use exam_attempt_repository::{ExamAttemptRepository, MongoExamAttemptRepository};
pub use exam_repository::{ExamRepository, MongoExamRepository};
pub use partner_repository::{MongoPartnerRepository, PartnerRepository};
pub use project_repository::{MongoProjectRepository, ProjectRepository};
pub use teacher_repository::{MongoTeacherRepository, TeacherRepository};
