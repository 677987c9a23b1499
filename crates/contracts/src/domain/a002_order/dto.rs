use chrono::NaiveDateTime;
use crate::enums::order_status::OrderStatus;
use crate::enums::payment_method::PaymentMethod;
use crate::shared::nullable::null_as_default;
use serde::{Deserialize, Serialize};

/// Row of the order search result (`/admin/orders/api/search`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: f64,
    /// Raw status code; unknown codes are displayed verbatim
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_method: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub user_full_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
}

impl OrderRow {
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::from_code(&self.order_status)
    }

    pub fn payment(&self) -> Option<PaymentMethod> {
        PaymentMethod::from_code(&self.payment_method)
    }
}
