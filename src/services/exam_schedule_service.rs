use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::ExamAttempt,
        dto::{
            request::ExamAttemptPatch,
            response::{TeacherDetailResponse, TeacherDto},
        },
    },
    repositories::{ExamAttemptRepository, ExamRepository, TeacherRepository},
    services::{clock::Clock, time_window::TimeWindow},
};

/// Value the admin exam select submits when nothing is chosen.
pub const EXAM_SELECT_PLACEHOLDER: &str = "null";

/// Outcome of a cancel call. "Not found" is not an error: the record the
/// caller wanted gone is gone either way, but callers can now tell the two
/// cases apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelOutcome {
    Deleted,
    NotFound,
}

/// Latest moment an attempt may still be completed.
pub fn attempt_deadline(start_time: DateTime<Utc>, duration_minutes: i64) -> DateTime<Utc> {
    start_time + Duration::minutes(duration_minutes)
}

/// Governs the lifecycle of a teacher's scheduled exam attempts: creation,
/// rescheduling, cancellation, and the lapse sweep.
pub struct ExamScheduleService {
    attempts: Arc<dyn ExamAttemptRepository>,
    exams: Arc<dyn ExamRepository>,
    teachers: Arc<dyn TeacherRepository>,
    window: TimeWindow,
}

impl ExamScheduleService {
    pub fn new(
        attempts: Arc<dyn ExamAttemptRepository>,
        exams: Arc<dyn ExamRepository>,
        teachers: Arc<dyn TeacherRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            attempts,
            exams,
            teachers,
            window: TimeWindow::new(clock),
        }
    }

    /// Puts an exam on the teacher's calendar. The start must not already
    /// have elapsed and the exam select must carry a real choice; nothing
    /// is persisted otherwise.
    pub async fn schedule(
        &self,
        teacher_id: &str,
        exam_selection: &str,
        start_time: DateTime<Utc>,
    ) -> AppResult<ExamAttempt> {
        if self.window.already_elapsed(start_time) {
            return Err(AppError::PastDeadline(format!(
                "requested start {} is not in the future",
                start_time
            )));
        }

        if exam_selection.is_empty() || exam_selection == EXAM_SELECT_PLACEHOLDER {
            return Err(AppError::InvalidSelection(
                "no exam was selected".to_string(),
            ));
        }

        let attempt = ExamAttempt::new(teacher_id, exam_selection, start_time);
        self.attempts.create(attempt).await
    }

    /// Moves an existing attempt to a new start. Only the start time is
    /// mutable; everything else on the record is left untouched.
    pub async fn reschedule(
        &self,
        attempt_id: &str,
        patch: ExamAttemptPatch,
    ) -> AppResult<ExamAttempt> {
        if patch.is_empty() {
            return Err(AppError::NothingToUpdate(format!(
                "no fields given for attempt '{}'",
                attempt_id
            )));
        }

        if let Some(start_time) = patch.start_time {
            if self.window.already_elapsed(start_time) {
                return Err(AppError::PastDeadline(format!(
                    "requested start {} is not in the future",
                    start_time
                )));
            }
        }

        let mut attempt = self
            .attempts
            .find_by_id(attempt_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Exam attempt with id '{}' not found", attempt_id))
            })?;

        if let Some(start_time) = patch.start_time {
            attempt.start_time = start_time;
        }
        attempt.modified_at = Some(self.window.now());

        self.attempts.update(attempt).await
    }

    /// Removes an attempt outright, from any state.
    pub async fn cancel(&self, attempt_id: &str) -> AppResult<CancelOutcome> {
        if self.attempts.delete(attempt_id).await? {
            Ok(CancelOutcome::Deleted)
        } else {
            Ok(CancelOutcome::NotFound)
        }
    }

    /// The teacher detail view: sweeps lapsed attempts, then returns the
    /// reconciled attempt list (newest first) and the exams the teacher is
    /// still allowed to schedule.
    ///
    /// The sweep runs inline here, in the read path, instead of in a
    /// background job. Every detail fetch pays O(open attempts) and may
    /// write.
    pub async fn reconcile_and_fetch(&self, teacher_id: &str) -> AppResult<TeacherDetailResponse> {
        let teacher = self
            .teachers
            .find_by_id(teacher_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Teacher with id '{}' not found", teacher_id))
            })?;

        let mut attempts = self.attempts.find_by_teacher(teacher_id).await?;

        for attempt in attempts.iter_mut() {
            if !attempt.is_open() {
                continue;
            }

            let Some(exam) = self.exams.find_by_id(&attempt.exam_id).await? else {
                log::warn!(
                    "attempt {} references missing exam {}, skipping sweep",
                    attempt.id,
                    attempt.exam_id
                );
                continue;
            };

            let deadline = attempt_deadline(attempt.start_time, exam.duration_minutes);
            if self.window.already_elapsed(deadline) {
                // Deadline has passed without a result: the attempt is lost.
                attempt.active = true;
                attempt.result = Some(0);
                attempt.end_time = Some(deadline);
                attempt.modified_at = Some(self.window.now());

                *attempt = self.attempts.update(attempt.clone()).await?;
            }
        }

        // An exam stays blocked while any attempt for it has no result yet;
        // a concluded attempt (scored or lapsed) frees the exam up again.
        let blocked: HashSet<&str> = attempts
            .iter()
            .filter(|attempt| attempt.result.is_none())
            .map(|attempt| attempt.exam_id.as_str())
            .collect();

        let eligible_exams = self
            .exams
            .list_confirmed()
            .await?
            .into_iter()
            .filter(|exam| !blocked.contains(exam.id.as_str()))
            .collect();

        attempts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(TeacherDetailResponse {
            teacher: TeacherDto::from(teacher),
            attempts,
            eligible_exams,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::exam_attempt_repository::MockExamAttemptRepository;
    use crate::repositories::exam_repository::MockExamRepository;
    use crate::repositories::teacher_repository::MockTeacherRepository;
    use crate::services::clock::MockClock;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn service_at(
        now: DateTime<Utc>,
        attempts: MockExamAttemptRepository,
        exams: MockExamRepository,
        teachers: MockTeacherRepository,
    ) -> ExamScheduleService {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now);
        ExamScheduleService::new(
            Arc::new(attempts),
            Arc::new(exams),
            Arc::new(teachers),
            Arc::new(clock),
        )
    }

    #[tokio::test]
    async fn schedule_rejects_start_in_the_past_without_persisting() {
        let mut attempts = MockExamAttemptRepository::new();
        attempts.expect_create().never();

        let service = service_at(
            fixed_now(),
            attempts,
            MockExamRepository::new(),
            MockTeacherRepository::new(),
        );

        let result = service
            .schedule("teacher-1", "exam-1", fixed_now() - Duration::hours(1))
            .await;

        assert!(matches!(result, Err(AppError::PastDeadline(_))));
    }

    #[tokio::test]
    async fn schedule_rejects_placeholder_selection_without_persisting() {
        let mut attempts = MockExamAttemptRepository::new();
        attempts.expect_create().never();

        let service = service_at(
            fixed_now(),
            attempts,
            MockExamRepository::new(),
            MockTeacherRepository::new(),
        );

        let result = service
            .schedule(
                "teacher-1",
                EXAM_SELECT_PLACEHOLDER,
                fixed_now() + Duration::hours(1),
            )
            .await;

        assert!(matches!(result, Err(AppError::InvalidSelection(_))));
    }

    #[tokio::test]
    async fn schedule_creates_a_fresh_open_attempt() {
        let mut attempts = MockExamAttemptRepository::new();
        attempts
            .expect_create()
            .withf(|attempt: &ExamAttempt| {
                attempt.point == 0
                    && attempt.result.is_none()
                    && attempt.end_time.is_none()
                    && !attempt.active
            })
            .returning(|attempt| Ok(attempt));

        let service = service_at(
            fixed_now(),
            attempts,
            MockExamRepository::new(),
            MockTeacherRepository::new(),
        );

        let attempt = service
            .schedule("teacher-1", "exam-1", fixed_now() + Duration::hours(1))
            .await
            .unwrap();

        assert_eq!(attempt.teacher_id, "teacher-1");
        assert_eq!(attempt.exam_id, "exam-1");
    }

    #[tokio::test]
    async fn reschedule_surfaces_missing_attempts() {
        let mut attempts = MockExamAttemptRepository::new();
        attempts.expect_find_by_id().returning(|_| Ok(None));
        attempts.expect_update().never();

        let service = service_at(
            fixed_now(),
            attempts,
            MockExamRepository::new(),
            MockTeacherRepository::new(),
        );

        let patch = ExamAttemptPatch {
            start_time: Some(fixed_now() + Duration::hours(2)),
        };
        let result = service.reschedule("missing", patch).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn reschedule_changes_only_the_start_time() {
        let existing = ExamAttempt::new("teacher-1", "exam-1", fixed_now() + Duration::hours(1));
        let existing_id = existing.id.clone();
        let new_start = fixed_now() + Duration::hours(3);

        let mut attempts = MockExamAttemptRepository::new();
        {
            let existing = existing.clone();
            attempts
                .expect_find_by_id()
                .returning(move |_| Ok(Some(existing.clone())));
        }
        attempts
            .expect_update()
            .withf(move |attempt: &ExamAttempt| {
                attempt.start_time == new_start
                    && attempt.point == 0
                    && attempt.result.is_none()
                    && attempt.end_time.is_none()
            })
            .returning(|attempt| Ok(attempt));

        let service = service_at(
            fixed_now(),
            attempts,
            MockExamRepository::new(),
            MockTeacherRepository::new(),
        );

        let patch = ExamAttemptPatch {
            start_time: Some(new_start),
        };
        let updated = service.reschedule(&existing_id, patch).await.unwrap();

        assert_eq!(updated.start_time, new_start);
    }

    #[tokio::test]
    async fn reschedule_rejects_empty_patch() {
        let service = service_at(
            fixed_now(),
            MockExamAttemptRepository::new(),
            MockExamRepository::new(),
            MockTeacherRepository::new(),
        );

        let result = service
            .reschedule("attempt-1", ExamAttemptPatch::default())
            .await;

        assert!(matches!(result, Err(AppError::NothingToUpdate(_))));
    }

    #[tokio::test]
    async fn cancel_distinguishes_deleted_from_not_found() {
        let mut attempts = MockExamAttemptRepository::new();
        attempts
            .expect_delete()
            .returning(|id| Ok(id == "present"));

        let service = service_at(
            fixed_now(),
            attempts,
            MockExamRepository::new(),
            MockTeacherRepository::new(),
        );

        assert_eq!(
            service.cancel("present").await.unwrap(),
            CancelOutcome::Deleted
        );
        assert_eq!(
            service.cancel("absent").await.unwrap(),
            CancelOutcome::NotFound
        );
    }

    #[test]
    fn deadline_rolls_over_month_boundaries() {
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 23, 50, 0).unwrap();
        let deadline = attempt_deadline(start, 20);

        assert_eq!(
            deadline,
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 10, 0).unwrap()
        );
    }
}
