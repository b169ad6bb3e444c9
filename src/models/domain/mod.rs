pub mod component;
pub mod exam;
pub mod exam_attempt;
pub mod partner;
pub mod project;
pub mod teacher;

pub use component::Component;
pub use exam::Exam;
pub use exam_attempt::{AttemptState, ExamAttempt};
pub use partner::{Partner, PartnerStatus};
pub use project::Project;
pub use teacher::Teacher;
