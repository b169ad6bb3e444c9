use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Teacher {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub document_type_id: String,
    pub document: String,
    pub email: String,
    pub country_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Teacher {
    pub fn new(
        first_name: &str,
        last_name: &str,
        document_type_id: &str,
        document: &str,
        email: &str,
        country_id: &str,
    ) -> Self {
        Teacher {
            id: Uuid::new_v4().to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            document_type_id: document_type_id.to_string(),
            document: document.to_string(),
            email: email.to_string(),
            country_id: country_id.to_string(),
            phone: None,
            birth_date: None,
            gender: None,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }
}
