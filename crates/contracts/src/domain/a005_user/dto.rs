use crate::shared::nullable::null_as_default;
use serde::{Deserialize, Serialize};

/// Row of the user search result (`/api/admin/users/search`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: i64,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Role code such as `ADMIN`, `STAFF`, `USER`
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub role_display_name: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UserRow {
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }

    pub fn role_badge_class(&self) -> &'static str {
        match self.role_name.as_deref() {
            Some("ADMIN") => "bg-danger",
            Some("STAFF") => "bg-warning text-dark",
            _ => "bg-info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_badge_follows_role_code() {
        let mut user: UserRow =
            serde_json::from_str(r#"{"id": 1, "email": "x@y.z", "roleName": "ADMIN"}"#).unwrap();
        assert_eq!(user.role_badge_class(), "bg-danger");
        user.role_name = Some("STAFF".into());
        assert_eq!(user.role_badge_class(), "bg-warning text-dark");
        user.role_name = None;
        assert_eq!(user.role_badge_class(), "bg-info");
        assert!(!user.is_active());
    }
}
