use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::{domain::Teacher, dto::request::TeacherFilterParams},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn create(&self, teacher: Teacher) -> AppResult<Teacher>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Teacher>>;
    /// Exact-match lookup across the index filters; at most one record.
    async fn find_filtered(&self, filters: TeacherFilterParams) -> AppResult<Option<Teacher>>;
    async fn find_page(&self, offset: i64, limit: i64) -> AppResult<(Vec<Teacher>, i64)>;
    async fn update(&self, teacher: Teacher) -> AppResult<Teacher>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MongoTeacherRepository {
    collection: Collection<Teacher>,
}

impl MongoTeacherRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("teachers");
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

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(email_index).await?;

        Ok(())
    }
}

#[async_trait]
impl TeacherRepository for MongoTeacherRepository {
    async fn create(&self, teacher: Teacher) -> AppResult<Teacher> {
        self.collection.insert_one(&teacher).await?;
        Ok(teacher)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Teacher>> {
        let teacher = self.collection.find_one(doc! { "id": id }).await?;
        Ok(teacher)
    }

    async fn find_filtered(&self, filters: TeacherFilterParams) -> AppResult<Option<Teacher>> {
        let mut filter = Document::new();
        if let Some(name) = filters.name {
            filter.insert("first_name", name);
        }
        if let Some(last_name) = filters.last_name {
            filter.insert("last_name", last_name);
        }
        if let Some(document) = filters.document {
            filter.insert("document", document);
        }
        if let Some(email) = filters.email {
            filter.insert("email", email);
        }

        let teacher = self.collection.find_one(filter).await?;
        Ok(teacher)
    }

    async fn find_page(&self, offset: i64, limit: i64) -> AppResult<(Vec<Teacher>, i64)> {
        let total = self.collection.count_documents(doc! {}).await?;

        let teachers = self
            .collection
            .find(doc! {})
            .sort(doc! { "first_name": 1, "last_name": 1 })
            .skip(offset.max(0) as u64)
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok((teachers, total as i64))
    }

    async fn update(&self, teacher: Teacher) -> AppResult<Teacher> {
        let result = self
            .collection
            .replace_one(doc! { "id": &teacher.id }, &teacher)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Teacher with id '{}' not found",
                teacher.id
            )));
        }

        Ok(teacher)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Teacher with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
