use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Project,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, project: Project) -> AppResult<Project>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Project>>;
    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<Project>>;
    async fn update(&self, project: Project) -> AppResult<Project>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MongoProjectRepository {
    collection: Collection<Project>,
}

impl MongoProjectRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("projects");
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

        let owner_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1 })
            .options(IndexOptions::builder().name("owner_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(owner_index).await?;

        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for MongoProjectRepository {
    async fn create(&self, project: Project) -> AppResult<Project> {
        self.collection.insert_one(&project).await?;
        Ok(project)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Project>> {
        let project = self.collection.find_one(doc! { "id": id }).await?;
        Ok(project)
    }

    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<Project>> {
        let projects = self
            .collection
            .find(doc! { "owner_id": owner_id })
            .await?
            .try_collect()
            .await?;
        Ok(projects)
    }

    async fn update(&self, project: Project) -> AppResult<Project> {
        let result = self
            .collection
            .replace_one(doc! { "id": &project.id }, &project)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Project with id '{}' not found",
                project.id
            )));
        }

        Ok(project)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Project with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
