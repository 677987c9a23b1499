use chrono::NaiveDateTime;
use crate::shared::nullable::null_as_default;
use serde::{Deserialize, Serialize};

/// Row of the voucher search result (`/admin/vouchers/api/search`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherRow {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount_percent: f64,
    #[serde(default)]
    pub max_discount_amount: Option<f64>,
    #[serde(default)]
    pub min_order_value: Option<f64>,
    #[serde(default)]
    pub used_count: Option<u32>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub end_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    /// Server-computed: not expired and usage limit not reached
    #[serde(default, deserialize_with = "null_as_default")]
    pub valid: bool,
}

/// Combined activation/validity state shown in the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoucherValidity {
    Valid,
    ExpiredOrExhausted,
    Disabled,
}

impl VoucherValidity {
    pub fn display_name(&self) -> &'static str {
        match self {
            VoucherValidity::Valid => "Còn hiệu lực",
            VoucherValidity::ExpiredOrExhausted => "Hết hạn/Đã dùng hết",
            VoucherValidity::Disabled => "Vô hiệu",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            VoucherValidity::Valid => "check-circle",
            VoucherValidity::ExpiredOrExhausted => "exclamation-circle",
            VoucherValidity::Disabled => "x-circle",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            VoucherValidity::Valid => "bg-success-subtle text-success",
            VoucherValidity::ExpiredOrExhausted => "bg-warning-subtle text-warning",
            VoucherValidity::Disabled => "bg-secondary-subtle text-secondary",
        }
    }
}

impl VoucherRow {
    pub fn validity(&self) -> VoucherValidity {
        match (self.is_active, self.valid) {
            (true, true) => VoucherValidity::Valid,
            (true, false) => VoucherValidity::ExpiredOrExhausted,
            (false, _) => VoucherValidity::Disabled,
        }
    }

    pub fn used(&self) -> u32 {
        self.used_count.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voucher(is_active: bool, valid: bool) -> VoucherRow {
        VoucherRow {
            id: 1,
            code: "SALE10".into(),
            description: None,
            discount_percent: 10.0,
            max_discount_amount: None,
            min_order_value: None,
            used_count: None,
            usage_limit: None,
            end_at: None,
            is_active,
            valid,
        }
    }

    #[test]
    fn validity_combines_active_and_valid_flags() {
        assert_eq!(voucher(true, true).validity(), VoucherValidity::Valid);
        assert_eq!(voucher(true, false).validity(), VoucherValidity::ExpiredOrExhausted);
        assert_eq!(voucher(false, true).validity(), VoucherValidity::Disabled);
        assert_eq!(voucher(false, false).validity(), VoucherValidity::Disabled);
    }

    #[test]
    fn decodes_minimal_voucher() {
        let row: VoucherRow = serde_json::from_str(
            r#"{"id": 3, "code": "freeship", "discountPercent": 15, "endAt": "2025-01-31T23:59:00"}"#,
        )
        .unwrap();
        assert_eq!(row.discount_percent, 15.0);
        assert_eq!(row.used(), 0);
        assert!(row.end_at.is_some());
    }

    #[test]
    fn null_flags_read_as_disabled() {
        let row: VoucherRow = serde_json::from_str(
            r#"{"id": 5, "code": null, "discountPercent": null, "isActive": null, "valid": null}"#,
        )
        .unwrap();
        assert_eq!(row.code, "");
        assert_eq!(row.discount_percent, 0.0);
        assert_eq!(row.validity(), VoucherValidity::Disabled);
    }
}
