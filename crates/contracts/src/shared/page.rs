use serde::{Deserialize, Serialize};

/// Paginated search response.
///
/// Most search endpoints serialize a Spring `Page`: rows under `content` and a
/// zero-based `number`. The user search endpoint returns rows under `users`
/// and a one-based `currentPage`. Both shapes decode into this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    #[serde(alias = "users", alias = "items")]
    pub content: Option<Vec<T>>,
    /// Zero-based page index
    #[serde(default)]
    pub number: Option<u32>,
    /// One-based page index (user search only)
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub number_of_elements: u32,
}

impl<T> Default for PageEnvelope<T> {
    fn default() -> Self {
        Self {
            content: None,
            number: None,
            current_page: None,
            total_pages: 0,
            total_elements: 0,
            number_of_elements: 0,
        }
    }
}

impl<T> PageEnvelope<T> {
    pub fn items(&self) -> &[T] {
        self.content.as_deref().unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// One-based page the server reported, if it reported one.
    pub fn reported_page(&self) -> Option<u32> {
        self.number.map(|n| n + 1).or(self.current_page)
    }

    pub fn page(&self) -> u32 {
        self.reported_page().unwrap_or(1).max(1)
    }

    pub fn info(&self) -> PageInfo {
        PageInfo {
            page: self.page(),
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            number_of_elements: self.number_of_elements,
        }
    }

    /// Splits the envelope into its rows and paging metadata.
    pub fn into_parts(self) -> (Vec<T>, PageInfo) {
        let info = self.info();
        (self.content.unwrap_or_default(), info)
    }
}

/// Paging metadata detached from the rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// One-based
    pub page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub number_of_elements: u32,
}

impl PageInfo {
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: i64,
    }

    #[test]
    fn decodes_spring_page() {
        let json = r#"{
            "content": [{"id": 1}, {"id": 2}],
            "number": 2,
            "totalPages": 5,
            "totalElements": 42,
            "numberOfElements": 2,
            "first": false,
            "last": false
        }"#;
        let page: PageEnvelope<Row> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items().len(), 2);
        assert_eq!(page.page(), 3);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.total_elements, 42);
        assert!(!page.info().is_last());
    }

    #[test]
    fn decodes_user_search_shape() {
        let json = r#"{
            "users": [{"id": 7}],
            "currentPage": 4,
            "totalPages": 4,
            "totalElements": 31,
            "numberOfElements": 1
        }"#;
        let page: PageEnvelope<Row> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items(), &[Row { id: 7 }]);
        assert_eq!(page.page(), 4);
        assert!(page.info().is_last());
    }

    #[test]
    fn null_or_missing_content_is_empty() {
        let page: PageEnvelope<Row> =
            serde_json::from_str(r#"{"content": null, "totalPages": 0}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.page(), 1);

        let page: PageEnvelope<Row> = serde_json::from_str("{}").unwrap();
        let (rows, info) = page.into_parts();
        assert!(rows.is_empty());
        assert_eq!(info.total_elements, 0);
    }

    #[test]
    fn decodes_order_page() {
        use crate::domain::a002_order::dto::OrderRow;
        use crate::enums::order_status::OrderStatus;

        let json = r#"{
            "content": [
                {"id": 21, "totalAmount": 450000.00, "orderStatus": "SHIPPED",
                 "paymentMethod": "VNPAY", "createdAt": "2024-05-02T09:15:00",
                 "userFullName": "Trần Thị B", "userEmail": "b@example.com"},
                {"id": 20, "totalAmount": 120000.00, "orderStatus": "PENDING",
                 "paymentMethod": null, "createdAt": "2024-05-01T18:40:12.5",
                 "userFullName": null, "userEmail": null}
            ],
            "pageable": {"pageNumber": 0, "pageSize": 10},
            "number": 0, "size": 10, "totalPages": 3, "totalElements": 22,
            "numberOfElements": 2, "first": true, "last": false, "empty": false
        }"#;
        let page: PageEnvelope<OrderRow> = serde_json::from_str(json).unwrap();
        let (rows, info) = page.into_parts();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status(), Some(OrderStatus::Shipped));
        assert_eq!(rows[1].payment_method, "");
        assert_eq!(info.page, 1);
        assert_eq!(info.total_elements, 22);
    }

    #[test]
    fn decodes_voucher_page() {
        use crate::domain::a006_voucher::dto::{VoucherRow, VoucherValidity};

        let json = r#"{
            "content": [
                {"id": 3, "code": "SUMMER24", "description": "Hè 2024",
                 "discountPercent": 15, "maxDiscountAmount": 50000,
                 "minOrderValue": 200000, "usedCount": 8, "usageLimit": 100,
                 "startAt": "2024-06-01T00:00:00", "endAt": "2024-08-31T23:59:59",
                 "isActive": true, "valid": true}
            ],
            "number": 1, "totalPages": 2, "totalElements": 11, "numberOfElements": 1
        }"#;
        let page: PageEnvelope<VoucherRow> = serde_json::from_str(json).unwrap();
        assert_eq!(page.page(), 2);
        assert_eq!(page.items()[0].validity(), VoucherValidity::Valid);
        assert_eq!(page.items()[0].usage_limit, Some(100));
    }

    #[test]
    fn decodes_user_page() {
        use crate::domain::a005_user::dto::UserRow;

        let json = r#"{
            "users": [
                {"id": 2, "fullName": "Lê Văn C", "gender": "MALE", "email": "c@example.com",
                 "phone": null, "roleName": "STAFF", "roleDisplayName": "Nhân viên",
                 "isActive": true}
            ],
            "currentPage": 2, "totalPages": 5, "totalElements": 42, "pageSize": 10
        }"#;
        let page: PageEnvelope<UserRow> = serde_json::from_str(json).unwrap();
        assert_eq!(page.page(), 2);
        assert_eq!(page.items()[0].role_badge_class(), "bg-warning text-dark");
        assert!(page.items()[0].is_active());
        assert_eq!(page.info().total_elements, 42);
    }
}
