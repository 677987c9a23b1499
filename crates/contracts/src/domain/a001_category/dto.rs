use crate::shared::nullable::null_as_default;
use serde::{Deserialize, Serialize};

/// Row of the category search result (`/admin/categories/api/search`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub parent_category: Option<ParentCategoryRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

/// Parent category as embedded in a child row; only the name is displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentCategoryRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl CategoryRow {
    pub fn is_root(&self) -> bool {
        self.parent_category.is_none()
    }

    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_child_and_root_rows() {
        let json = r#"[
            {"id": 1, "categoryName": "Áo", "slug": "ao", "isActive": true, "parentCategory": null},
            {"id": 3, "categoryName": null, "slug": null, "isActive": null},
            {"id": 2, "categoryName": "Áo thun", "slug": "ao-thun", "imageUrl": "",
             "parentCategory": {"id": 1, "categoryName": "Áo", "slug": "ao"}}
        ]"#;
        let rows: Vec<CategoryRow> = serde_json::from_str(json).unwrap();
        assert!(rows[0].is_root());
        assert!(rows[0].is_active);
        assert_eq!(rows[1].slug, "");
        assert!(!rows[1].is_active);
        assert!(!rows[2].is_root());
        assert!(!rows[2].is_active);
        assert_eq!(rows[2].image(), None);
        assert_eq!(rows[2].parent_category.as_ref().unwrap().category_name, "Áo");
    }
}
