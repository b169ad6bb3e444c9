use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    Pending,
    Approved,
    Suspended,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Partner {
    pub id: String,
    /// Stored uppercase, matching how the admin screens always rendered it.
    pub name: String,
    pub document_type_id: String,
    pub document: String,
    pub address: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub country_id: String,
    pub status: PartnerStatus,
    /// Users attached to this partner organisation.
    #[serde(default)]
    pub user_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Partner {
    pub fn new(
        name: &str,
        document_type_id: &str,
        document: &str,
        address: &str,
        email: &str,
        country_id: &str,
    ) -> Self {
        Partner {
            id: Uuid::new_v4().to_string(),
            name: name.to_uppercase(),
            document_type_id: document_type_id.to_string(),
            document: document.to_string(),
            address: address.to_uppercase(),
            email: email.to_string(),
            phone: None,
            country_id: country_id.to_string(),
            status: PartnerStatus::Pending,
            user_ids: Vec::new(),
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_partner_uppercases_name_and_address() {
        let partner = Partner::new("acme school", "1", "900123", "main st 1", "a@b.co", "co");

        assert_eq!(partner.name, "ACME SCHOOL");
        assert_eq!(partner.address, "MAIN ST 1");
        assert_eq!(partner.status, PartnerStatus::Pending);
        assert!(partner.user_ids.is_empty());
    }
}
