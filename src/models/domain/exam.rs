use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Exam {
    pub id: String,
    pub name: String,
    /// Time allowed to sit the exam once it has started.
    pub duration_minutes: i64,
    /// Only confirmed exams appear in the scheduling catalog.
    pub confirmed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Exam {
    pub fn new(name: &str, duration_minutes: i64, confirmed: bool) -> Self {
        Exam {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            duration_minutes,
            confirmed,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }
}
