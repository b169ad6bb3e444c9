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
    models::domain::Partner,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PartnerRepository: Send + Sync {
    async fn create(&self, partner: Partner) -> AppResult<Partner>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Partner>>;
    /// Case-insensitive substring search over name and document,
    /// newest first.
    async fn search(
        &self,
        term: Option<String>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Partner>, i64)>;
    async fn update(&self, partner: Partner) -> AppResult<Partner>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MongoPartnerRepository {
    collection: Collection<Partner>,
}

impl MongoPartnerRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("partners");
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

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().name("name".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(name_index).await?;

        Ok(())
    }
}

#[async_trait]
impl PartnerRepository for MongoPartnerRepository {
    async fn create(&self, partner: Partner) -> AppResult<Partner> {
        self.collection.insert_one(&partner).await?;
        Ok(partner)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Partner>> {
        let partner = self.collection.find_one(doc! { "id": id }).await?;
        Ok(partner)
    }

    async fn search(
        &self,
        term: Option<String>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Partner>, i64)> {
        let filter = match term {
            Some(term) if !term.trim().is_empty() => {
                // Escaped so search terms are matched literally.
                let pattern = regex::escape(term.trim());
                doc! {
                    "$or": [
                        { "name": { "$regex": &pattern, "$options": "i" } },
                        { "document": { "$regex": &pattern, "$options": "i" } },
                    ]
                }
            }
            _ => Document::new(),
        };

        let total = self.collection.count_documents(filter.clone()).await?;

        let partners = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(offset.max(0) as u64)
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok((partners, total as i64))
    }

    async fn update(&self, partner: Partner) -> AppResult<Partner> {
        let result = self
            .collection
            .replace_one(doc! { "id": &partner.id }, &partner)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Partner with id '{}' not found",
                partner.id
            )));
        }

        Ok(partner)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Partner with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
