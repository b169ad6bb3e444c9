use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::ExamAttempt,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExamAttemptRepository: Send + Sync {
    async fn create(&self, attempt: ExamAttempt) -> AppResult<ExamAttempt>;
    async fn update(&self, attempt: ExamAttempt) -> AppResult<ExamAttempt>;
    /// Returns whether a record was actually removed.
    async fn delete(&self, id: &str) -> AppResult<bool>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<ExamAttempt>>;
    async fn find_by_teacher(&self, teacher_id: &str) -> AppResult<Vec<ExamAttempt>>;
}

pub struct MongoExamAttemptRepository {
    collection: Collection<ExamAttempt>,
}

impl MongoExamAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("exam_attempts");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for exam_attempts collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let teacher_index = IndexModel::builder()
            .keys(doc! { "teacher_id": 1 })
            .options(IndexOptions::builder().name("teacher_id".to_string()).build())
            .build();

        let teacher_exam_index = IndexModel::builder()
            .keys(doc! { "teacher_id": 1, "exam_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("teacher_exam".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(teacher_index).await?;
        self.collection.create_index(teacher_exam_index).await?;

        Ok(())
    }
}

#[async_trait]
impl ExamAttemptRepository for MongoExamAttemptRepository {
    async fn create(&self, attempt: ExamAttempt) -> AppResult<ExamAttempt> {
        self.collection.insert_one(&attempt).await?;
        Ok(attempt)
    }

    async fn update(&self, attempt: ExamAttempt) -> AppResult<ExamAttempt> {
        let result = self
            .collection
            .replace_one(doc! { "id": &attempt.id }, &attempt)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Exam attempt with id '{}' not found",
                attempt.id
            )));
        }

        Ok(attempt)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<ExamAttempt>> {
        let attempt = self.collection.find_one(doc! { "id": id }).await?;
        Ok(attempt)
    }

    async fn find_by_teacher(&self, teacher_id: &str) -> AppResult<Vec<ExamAttempt>> {
        let attempts = self
            .collection
            .find(doc! { "teacher_id": teacher_id })
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }
}
