pub mod clock;
pub mod component_service;
pub mod exam_schedule_service;
pub mod partner_service;
pub mod project_service;
pub mod teacher_service;
pub mod time_window;

pub use clock::{Clock, SystemClock};
pub use component_service::ComponentService;
pub use exam_schedule_service::{CancelOutcome, ExamScheduleService};
pub use partner_service::PartnerService;
pub use project_service::ProjectService;
pub use teacher_service::TeacherService;
pub use time_window::TimeWindow;
