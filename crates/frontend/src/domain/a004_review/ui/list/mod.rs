use crate::shared::components::ui::{IconBadge, RowAction, RowActions};
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::list_page::{list_page, Column, FilterField, ListEntity};
use contracts::domain::a004_review::dto::ReviewRow;
use leptos::prelude::*;

const STATUS_OPTIONS: &[(&str, &str)] = &[("approved", "Đã duyệt"), ("pending", "Chờ duyệt")];

const RATING_OPTIONS: &[(&str, &str)] = &[
    ("5", "5 sao"),
    ("4", "4 sao"),
    ("3", "3 sao"),
    ("2", "2 sao"),
    ("1", "1 sao"),
];

/// Approved reviews can be rejected and pending ones approved.
fn moderation_action(row: &ReviewRow) -> RowAction {
    if row.is_approved() {
        RowAction::confirmed(
            "Từ chối",
            "x-circle",
            "text-warning",
            format!("/admin/reviews/reject/{}", row.id),
            "Bạn có chắc chắn muốn từ chối đánh giá này?",
        )
    } else {
        RowAction::confirmed(
            "Duyệt",
            "check-circle",
            "text-success",
            format!("/admin/reviews/approve/{}", row.id),
            "Bạn có chắc chắn muốn duyệt đánh giá này?",
        )
    }
}

pub struct ReviewList;

impl ListEntity for ReviewList {
    type Row = ReviewRow;

    const ENDPOINT: &'static str = "/admin/reviews/api/search";
    const TITLE: &'static str = "Đánh giá";
    const NOUN: &'static str = "đánh giá";
    const EMPTY_TEXT: &'static str = "Chưa có đánh giá nào";
    const EMPTY_ICON: &'static str = "chat-square-text";
    const DEBOUNCE_MS: u32 = 300;

    fn filters() -> Vec<FilterField> {
        vec![
            FilterField::keyword("Sản phẩm, khách hàng hoặc nội dung..."),
            FilterField::select("status", "Trạng thái", "Tất cả trạng thái", STATUS_OPTIONS),
            FilterField::select("rating", "Số sao", "Tất cả", RATING_OPTIONS),
        ]
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::with_class("ID", "ps-4"),
            Column::new("Sản phẩm"),
            Column::new("Khách hàng"),
            Column::with_class("Đánh giá", "text-center"),
            Column::new("Nội dung"),
            Column::with_class("Trạng thái", "text-center"),
            Column::new("Ngày tạo"),
            Column::with_class("Thao tác", "text-center"),
        ]
    }

    fn render_row(row: &ReviewRow) -> AnyView {
        let approval = if row.is_approved() {
            view! { <IconBadge class="bg-success-subtle text-success" icon="check-circle" text="Đã duyệt" /> }.into_any()
        } else {
            view! { <IconBadge class="bg-warning-subtle text-warning" icon="clock" text="Chờ duyệt" /> }.into_any()
        };
        let image = row
            .image_url
            .clone()
            .filter(|u| !u.is_empty())
            .map(|url| {
                view! {
                    <img src=url alt="Review image" class="img-thumbnail mt-1"
                        style="max-width: 80px; max-height: 80px;" />
                }
            });

        let id = row.id;
        view! {
            <tr>
                <td class="ps-4 fw-semibold text-muted">{id}</td>
                <td>
                    <div class="fw-bold">{row.product_name.clone().unwrap_or_default()}</div>
                    <small class="text-muted">
                        "SKU: "{row.product_sku.clone().unwrap_or_else(|| "N/A".to_string())}
                    </small>
                </td>
                <td>
                    <div>{row.user_full_name.clone().unwrap_or_default()}</div>
                    <small class="text-muted">{row.user_email.clone().unwrap_or_default()}</small>
                </td>
                <td class="text-center">
                    <span class="badge bg-warning text-dark">{format!("{} ★", row.rating)}</span>
                </td>
                <td>
                    <div class="text-truncate" style="max-width: 300px;">
                        {row.comment.clone().unwrap_or_default()}
                    </div>
                    {image}
                </td>
                <td class="text-center">{approval}</td>
                <td>{format_datetime_opt(row.created_at.as_ref())}</td>
                <td class="text-center">
                    <RowActions actions=vec![
                        RowAction::view(format!("/admin/reviews/view/{}", id)),
                        moderation_action(row),
                        RowAction::delete(
                            format!("/admin/reviews/delete/{}", id),
                            "Bạn có chắc chắn muốn xóa đánh giá này?",
                        ),
                    ] />
                </td>
            </tr>
        }
        .into_any()
    }
}

#[component]
pub fn ReviewListPage() -> impl IntoView {
    list_page::<ReviewList>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(is_approved: Option<bool>) -> ReviewRow {
        ReviewRow {
            id: 42,
            product_name: None,
            product_sku: None,
            user_full_name: None,
            user_email: None,
            rating: 4,
            comment: None,
            image_url: None,
            is_approved,
            created_at: None,
        }
    }

    #[test]
    fn test_pending_review_offers_approve() {
        let action = moderation_action(&review(None));
        assert_eq!(action.href, "/admin/reviews/approve/42");
        assert_eq!(action.label, "Duyệt");
        assert!(action.confirm.is_some());
    }

    #[test]
    fn test_approved_review_offers_reject() {
        let action = moderation_action(&review(Some(true)));
        assert_eq!(action.href, "/admin/reviews/reject/42");
        assert_eq!(action.tone, "text-warning");
    }
}
