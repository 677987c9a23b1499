use chrono::NaiveDateTime;
use crate::shared::nullable::null_as_default;
use serde::{Deserialize, Serialize};

/// Row of the review search result (`/admin/reviews/api/search`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRow {
    pub id: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_sku: Option<String>,
    #[serde(default)]
    pub user_full_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_approved: Option<bool>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl ReviewRow {
    pub fn is_approved(&self) -> bool {
        self.is_approved.unwrap_or(false)
    }
}
