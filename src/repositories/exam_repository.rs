use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Exam};

/// The exam catalog. Exams are authored elsewhere; the scheduler only reads
/// the confirmed set and individual durations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExamRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Exam>>;
    async fn list_confirmed(&self) -> AppResult<Vec<Exam>>;
}

pub struct MongoExamRepository {
    collection: Collection<Exam>,
}

impl MongoExamRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("exams");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let confirmed_index = IndexModel::builder()
            .keys(doc! { "confirmed": 1 })
            .options(IndexOptions::builder().name("confirmed".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(confirmed_index).await?;

        Ok(())
    }
}

#[async_trait]
impl ExamRepository for MongoExamRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Exam>> {
        let exam = self.collection.find_one(doc! { "id": id }).await?;
        Ok(exam)
    }

    async fn list_confirmed(&self) -> AppResult<Vec<Exam>> {
        let exams = self
            .collection
            .find(doc! { "confirmed": true })
            .await?
            .try_collect()
            .await?;
        Ok(exams)
    }
}
