use crate::shared::nullable::null_as_default;
use serde::{Deserialize, Serialize};

/// Row of the product search result (`/admin/products/api/search`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: i64,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock: i64,
    #[serde(default)]
    pub main_image_url: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl ProductRow {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_stock_and_price_read_as_zero() {
        let json = r#"{
            "id": 4, "sku": "AT-01", "productName": "Áo thun", "categoryName": null,
            "price": null, "stock": null, "mainImageUrl": null, "isActive": null
        }"#;
        let row: ProductRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.price, 0.0);
        assert!(!row.in_stock());
        assert!(!row.is_active());
        assert_eq!(row.category_name, None);
    }
}
