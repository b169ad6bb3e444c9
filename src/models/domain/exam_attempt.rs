use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pivot record between a teacher and an exam: one scheduled sitting.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExamAttempt {
    pub id: String,
    pub teacher_id: String,
    pub exam_id: String,
    pub start_time: DateTime<Utc>,
    /// Set at most once, either by grading or by the lapse sweep. Never cleared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// None means the attempt has not been sat or graded yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<i16>,
    /// Raised by the lapse sweep when it force-closes the attempt.
    pub active: bool,
    pub point: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum AttemptState {
    Scheduled,
    Completed,
    Lapsed,
}

impl ExamAttempt {
    pub fn new(teacher_id: &str, exam_id: &str, start_time: DateTime<Utc>) -> Self {
        ExamAttempt {
            id: Uuid::new_v4().to_string(),
            teacher_id: teacher_id.to_string(),
            exam_id: exam_id.to_string(),
            start_time,
            end_time: None,
            result: None,
            active: false,
            point: 0,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    /// An attempt with no end time is still open and subject to the sweep.
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn state(&self) -> AttemptState {
        if self.end_time.is_none() {
            AttemptState::Scheduled
        } else if self.active {
            AttemptState::Lapsed
        } else {
            AttemptState::Completed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_attempt_starts_scheduled_with_zero_point() {
        let attempt = ExamAttempt::new("teacher-1", "exam-1", Utc::now());

        assert_eq!(attempt.point, 0);
        assert_eq!(attempt.result, None);
        assert_eq!(attempt.end_time, None);
        assert!(!attempt.active);
        assert!(attempt.is_open());
        assert_eq!(attempt.state(), AttemptState::Scheduled);
    }

    #[test]
    fn closed_attempt_state_depends_on_active_flag() {
        let mut attempt = ExamAttempt::new("teacher-1", "exam-1", Utc::now());
        attempt.end_time = Some(Utc::now());
        attempt.result = Some(4);
        assert_eq!(attempt.state(), AttemptState::Completed);

        attempt.active = true;
        attempt.result = Some(0);
        assert_eq!(attempt.state(), AttemptState::Lapsed);
        assert!(!attempt.is_open());
    }
}
