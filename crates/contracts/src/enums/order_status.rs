use serde::{Deserialize, Serialize};

/// Order lifecycle status as sent by the server (`orderStatus`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Chờ xác nhận",
            OrderStatus::Confirmed => "Đã xác nhận",
            OrderStatus::Processing => "Đang xử lý",
            OrderStatus::Shipped => "Đang giao hàng",
            OrderStatus::Delivered => "Đã giao hàng",
            OrderStatus::Completed => "Hoàn thành",
            OrderStatus::Cancelled => "Đã hủy",
        }
    }

    /// Bootstrap icon name without the `bi-` prefix
    pub fn icon(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "clock",
            OrderStatus::Confirmed => "check-circle",
            OrderStatus::Processing => "arrow-repeat",
            OrderStatus::Shipped => "truck",
            OrderStatus::Delivered => "box-seam",
            OrderStatus::Completed => "check-circle-fill",
            OrderStatus::Cancelled => "x-circle",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "bg-warning-subtle text-warning",
            OrderStatus::Confirmed => "bg-info-subtle text-info",
            OrderStatus::Processing => "bg-primary-subtle text-primary",
            OrderStatus::Shipped => "bg-secondary-subtle text-secondary",
            OrderStatus::Delivered | OrderStatus::Completed => "bg-success-subtle text-success",
            OrderStatus::Cancelled => "bg-danger-subtle text-danger",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("RETURNED"), None);
    }

    #[test]
    fn serde_uses_server_codes() {
        let s: OrderStatus = serde_json::from_str("\"SHIPPED\"").unwrap();
        assert_eq!(s, OrderStatus::Shipped);
    }
}
