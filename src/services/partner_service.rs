use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Partner, PartnerStatus},
        dto::{
            request::{CreatePartnerRequest, PartnerPatch},
            response::PartnerListResponse,
        },
    },
    repositories::PartnerRepository,
};

pub struct PartnerService {
    repository: Arc<dyn PartnerRepository>,
}

impl PartnerService {
    pub fn new(repository: Arc<dyn PartnerRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_partners(
        &self,
        term: Option<String>,
        offset: i64,
        limit: i64,
    ) -> AppResult<PartnerListResponse> {
        let (partners, total) = self.repository.search(term, offset, limit).await?;
        Ok(PartnerListResponse { partners, total })
    }

    pub async fn create_partner(&self, request: CreatePartnerRequest) -> AppResult<Partner> {
        let mut partner = Partner::new(
            &request.name,
            &request.document_type_id,
            &request.document,
            &request.address,
            &request.email,
            &request.country_id,
        );
        partner.phone = request.phone;

        self.repository.create(partner).await
    }

    pub async fn get_partner(&self, id: &str) -> AppResult<Partner> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Partner with id '{}' not found", id)))
    }

    pub async fn update_partner(&self, id: &str, patch: PartnerPatch) -> AppResult<Partner> {
        if patch.is_empty() {
            return Err(AppError::NothingToUpdate(format!(
                "no fields given for partner '{}'",
                id
            )));
        }

        let mut partner = self.get_partner(id).await?;
        patch.apply(&mut partner);

        self.repository.update(partner).await
    }

    pub async fn update_status(&self, id: &str, status: PartnerStatus) -> AppResult<Partner> {
        let mut partner = self.get_partner(id).await?;
        partner.status = status;
        partner.modified_at = Some(Utc::now());

        self.repository.update(partner).await
    }

    pub async fn delete_partner(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }

    pub async fn attach_user(&self, id: &str, user_id: &str) -> AppResult<Partner> {
        let mut partner = self.get_partner(id).await?;

        if partner.user_ids.iter().any(|existing| existing == user_id) {
            return Err(AppError::Conflict(format!(
                "user '{}' is already attached to partner '{}'",
                user_id, id
            )));
        }

        partner.user_ids.push(user_id.to_string());
        partner.modified_at = Some(Utc::now());

        self.repository.update(partner).await
    }

    pub async fn detach_user(&self, id: &str, user_id: &str) -> AppResult<Partner> {
        let mut partner = self.get_partner(id).await?;

        let before = partner.user_ids.len();
        partner.user_ids.retain(|existing| existing != user_id);
        if partner.user_ids.len() == before {
            return Err(AppError::NotFound(format!(
                "user '{}' is not attached to partner '{}'",
                user_id, id
            )));
        }
        partner.modified_at = Some(Utc::now());

        self.repository.update(partner).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::partner_repository::MockPartnerRepository;

    fn sample_partner() -> Partner {
        Partner::new("ACME", "1", "900123", "MAIN ST", "acme@example.com", "co")
    }

    #[tokio::test]
    async fn detach_of_absent_membership_is_not_found() {
        let mut repository = MockPartnerRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(sample_partner())));
        repository.expect_update().never();

        let service = PartnerService::new(Arc::new(repository));
        let result = service.detach_user("partner-1", "user-9").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn attach_then_status_change_round_trip() {
        let mut repository = MockPartnerRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(sample_partner())));
        repository
            .expect_update()
            .returning(|partner| Ok(partner));

        let service = PartnerService::new(Arc::new(repository));

        let partner = service.attach_user("partner-1", "user-1").await.unwrap();
        assert_eq!(partner.user_ids, vec!["user-1".to_string()]);

        let partner = service
            .update_status("partner-1", PartnerStatus::Approved)
            .await
            .unwrap();
        assert_eq!(partner.status, PartnerStatus::Approved);
    }
}
