use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use certmind_server::{
    errors::{AppError, AppResult},
    models::domain::Partner,
    repositories::PartnerRepository,
    services::PartnerService,
};

struct InMemoryPartnerRepository {
    partners: Arc<RwLock<HashMap<String, Partner>>>,
}

impl InMemoryPartnerRepository {
    fn new() -> Self {
        Self {
            partners: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn insert(&self, partner: Partner) {
        self.partners
            .write()
            .await
            .insert(partner.id.clone(), partner);
    }
}

#[async_trait]
impl PartnerRepository for InMemoryPartnerRepository {
    async fn create(&self, partner: Partner) -> AppResult<Partner> {
        self.insert(partner.clone()).await;
        Ok(partner)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Partner>> {
        let partners = self.partners.read().await;
        Ok(partners.get(id).cloned())
    }

    async fn search(
        &self,
        term: Option<String>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Partner>, i64)> {
        let partners = self.partners.read().await;

        let needle = term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        // Terms match literally as case-insensitive substrings of the
        // stored name or document.
        let mut hits: Vec<Partner> = partners
            .values()
            .filter(|partner| match &needle {
                Some(needle) => {
                    partner.name.to_lowercase().contains(needle)
                        || partner.document.to_lowercase().contains(needle)
                }
                None => true,
            })
            .cloned()
            .collect();

        hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = hits.len() as i64;
        let start = (offset.max(0) as usize).min(hits.len());
        let end = (start + limit.max(0) as usize).min(hits.len());

        Ok((hits[start..end].to_vec(), total))
    }

    async fn update(&self, partner: Partner) -> AppResult<Partner> {
        let mut partners = self.partners.write().await;
        if !partners.contains_key(&partner.id) {
            return Err(AppError::NotFound(format!(
                "Partner with id '{}' not found",
                partner.id
            )));
        }
        partners.insert(partner.id.clone(), partner.clone());
        Ok(partner)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut partners = self.partners.write().await;
        partners
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Partner with id '{}' not found", id)))
    }
}

async fn directory_with(partners: Vec<Partner>) -> PartnerService {
    let repository = Arc::new(InMemoryPartnerRepository::new());
    for partner in partners {
        repository.insert(partner).await;
    }
    PartnerService::new(repository)
}

#[tokio::test]
async fn search_matches_substring_of_name() {
    let service = directory_with(vec![
        Partner::new("Acme School", "1", "900123", "Main St 1", "acme@example.com", "co"),
        Partner::new("Globex", "1", "555888", "Side St 2", "globex@example.com", "co"),
    ])
    .await;

    let response = service
        .list_partners(Some("cme".to_string()), 0, 20)
        .await
        .unwrap();

    assert_eq!(response.total, 1);
    assert_eq!(response.partners[0].name, "ACME SCHOOL");
}

#[tokio::test]
async fn search_matches_substring_of_document() {
    let service = directory_with(vec![
        Partner::new("Acme School", "1", "900123", "Main St 1", "acme@example.com", "co"),
        Partner::new("Globex", "1", "555888", "Side St 2", "globex@example.com", "co"),
    ])
    .await;

    let response = service
        .list_partners(Some("5588".to_string()), 0, 20)
        .await
        .unwrap();

    assert_eq!(response.total, 1);
    assert_eq!(response.partners[0].document, "555888");
}

#[tokio::test]
async fn search_ignores_case() {
    let service = directory_with(vec![Partner::new(
        "Globex",
        "1",
        "555888",
        "Side St 2",
        "globex@example.com",
        "co",
    )])
    .await;

    // Names are stored uppercase; a lowercase term must still hit.
    let response = service
        .list_partners(Some("globex".to_string()), 0, 20)
        .await
        .unwrap();

    assert_eq!(response.total, 1);
}

#[tokio::test]
async fn search_treats_metacharacters_literally() {
    let service = directory_with(vec![
        Partner::new("A.B Consulting", "1", "900123", "Main St 1", "ab@example.com", "co"),
        Partner::new("AXB Corp", "1", "555888", "Side St 2", "axb@example.com", "co"),
    ])
    .await;

    let response = service
        .list_partners(Some("a.b".to_string()), 0, 20)
        .await
        .unwrap();

    assert_eq!(response.total, 1);
    assert_eq!(response.partners[0].name, "A.B CONSULTING");
}

#[tokio::test]
async fn blank_search_term_lists_everyone() {
    let service = directory_with(vec![
        Partner::new("Acme School", "1", "900123", "Main St 1", "acme@example.com", "co"),
        Partner::new("Globex", "1", "555888", "Side St 2", "globex@example.com", "co"),
    ])
    .await;

    let response = service
        .list_partners(Some("   ".to_string()), 0, 20)
        .await
        .unwrap();

    assert_eq!(response.total, 2);
}
