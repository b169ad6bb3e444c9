use crate::models::domain::{Exam, ExamAttempt, Teacher};

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use chrono::{DateTime, Utc};

    /// Creates a standard test teacher
    pub fn test_teacher() -> Teacher {
        Teacher::new("Maria", "Gomez", "cc", "900123", "maria@example.com", "co")
    }

    /// Creates a confirmed exam with the given duration in minutes
    pub fn test_exam(name: &str, duration_minutes: i64) -> Exam {
        Exam::new(name, duration_minutes, true)
    }

    /// Creates an open attempt for the given teacher and exam
    pub fn test_attempt(teacher_id: &str, exam_id: &str, start: DateTime<Utc>) -> ExamAttempt {
        ExamAttempt::new(teacher_id, exam_id, start)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use chrono::Utc;

    #[test]
    fn test_fixtures_test_teacher() {
        let teacher = test_teacher();
        assert_eq!(teacher.first_name, "Maria");
        assert_eq!(teacher.email, "maria@example.com");
    }

    #[test]
    fn test_fixtures_test_attempt_is_open() {
        let attempt = test_attempt("teacher-1", "exam-1", Utc::now());
        assert!(attempt.is_open());
        assert_eq!(attempt.point, 0);
    }
}
