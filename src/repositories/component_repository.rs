use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Component,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    async fn create(&self, component: Component) -> AppResult<Component>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Component>>;
    async fn find_by_project(&self, project_id: &str) -> AppResult<Vec<Component>>;
    async fn update(&self, component: Component) -> AppResult<Component>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MongoComponentRepository {
    collection: Collection<Component>,
}

impl MongoComponentRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("components");
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

        let project_index = IndexModel::builder()
            .keys(doc! { "project_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("project_id".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(project_index).await?;

        Ok(())
    }
}

#[async_trait]
impl ComponentRepository for MongoComponentRepository {
    async fn create(&self, component: Component) -> AppResult<Component> {
        self.collection.insert_one(&component).await?;
        Ok(component)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Component>> {
        let component = self.collection.find_one(doc! { "id": id }).await?;
        Ok(component)
    }

    async fn find_by_project(&self, project_id: &str) -> AppResult<Vec<Component>> {
        let components = self
            .collection
            .find(doc! { "project_id": project_id })
            .await?
            .try_collect()
            .await?;
        Ok(components)
    }

    async fn update(&self, component: Component) -> AppResult<Component> {
        let result = self
            .collection
            .replace_one(doc! { "id": &component.id }, &component)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Component with id '{}' not found",
                component.id
            )));
        }

        Ok(component)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Component with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
