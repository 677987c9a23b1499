use crate::shared::components::table::number_format::format_money;
use crate::shared::components::ui::{IconBadge, RowAction, RowActions};
use crate::shared::date_utils::{format_date, format_time};
use crate::shared::icons::icon_with;
use crate::shared::list_page::{list_page, Column, FilterField, ListEntity};
use contracts::domain::a002_order::dto::OrderRow;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("PENDING", "Chờ xác nhận"),
    ("CONFIRMED", "Đã xác nhận"),
    ("PROCESSING", "Đang xử lý"),
    ("SHIPPED", "Đang giao hàng"),
    ("DELIVERED", "Đã giao hàng"),
    ("COMPLETED", "Hoàn thành"),
    ("CANCELLED", "Đã hủy"),
];

const PAYMENT_OPTIONS: &[(&str, &str)] = &[
    ("COD", "Thanh toán khi nhận hàng"),
    ("BANK_TRANSFER", "Chuyển khoản ngân hàng"),
];

const PERIOD_OPTIONS: &[(&str, &str)] = &[
    ("today", "Hôm nay"),
    ("week", "Tuần này"),
    ("month", "Tháng này"),
];

/// Badge class, icon and text for a status code; unknown codes show as-is.
pub fn status_badge(code: &str) -> (&'static str, &'static str, String) {
    match OrderStatus::from_code(code) {
        Some(status) => (
            status.badge_class(),
            status.icon(),
            status.display_name().to_string(),
        ),
        None => ("bg-secondary", "question-circle", code.to_string()),
    }
}

pub struct OrderList;

impl ListEntity for OrderList {
    type Row = OrderRow;

    const ENDPOINT: &'static str = "/admin/orders/api/search";
    const TITLE: &'static str = "Đơn hàng";
    const NOUN: &'static str = "đơn hàng";
    const EMPTY_TEXT: &'static str = "Không tìm thấy đơn hàng nào";

    fn filters() -> Vec<FilterField> {
        vec![
            FilterField::keyword("Mã đơn, tên hoặc email khách hàng..."),
            FilterField::select("status", "Trạng thái", "Tất cả trạng thái", STATUS_OPTIONS),
            FilterField::select("paymentMethod", "Thanh toán", "Tất cả phương thức", PAYMENT_OPTIONS),
            FilterField::select("period", "Thời gian", "Mọi thời gian", PERIOD_OPTIONS),
        ]
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::with_class("Mã đơn", "ps-4"),
            Column::new("Khách hàng"),
            Column::new("Tổng tiền"),
            Column::new("Thanh toán"),
            Column::with_class("Trạng thái", "text-center"),
            Column::new("Ngày đặt"),
            Column::with_class("Thao tác", "text-center"),
        ]
    }

    fn render_row(row: &OrderRow) -> AnyView {
        let payment = match row.payment() {
            Some(method) => view! {
                <IconBadge class=method.badge_class() icon=method.icon() text=method.display_name() />
            }
            .into_any(),
            None => view! { <span>{row.payment_method.clone()}</span> }.into_any(),
        };
        let (status_class, status_icon, status_text) = status_badge(&row.order_status);

        let created = row.created_at.map(|at| {
            view! {
                {format_date(&at)}
                <br />
                <small class="text-muted">{format_time(&at)}</small>
            }
        });

        let id = row.id;
        view! {
            <tr>
                <td class="ps-4 fw-semibold text-muted">{format!("#{}", id)}</td>
                <td>
                    <div class="d-flex align-items-center">
                        <div class="me-3">
                            <div class="bg-primary bg-opacity-10 rounded-circle d-flex align-items-center justify-content-center"
                                style="width: 40px; height: 40px">
                                {icon_with("person-fill", "text-primary")}
                            </div>
                        </div>
                        <div>
                            <div class="fw-bold">{row.user_full_name.clone().unwrap_or_default()}</div>
                            <small class="text-muted">{row.user_email.clone().unwrap_or_default()}</small>
                        </div>
                    </div>
                </td>
                <td class="fw-bold text-success">{format!("{} ₫", format_money(row.total_amount))}</td>
                <td>{payment}</td>
                <td class="text-center">
                    <IconBadge class=status_class icon=status_icon text=status_text />
                </td>
                <td>{created}</td>
                <td class="text-center">
                    <RowActions actions=vec![
                        RowAction::view(format!("/admin/orders/{}", id)),
                        RowAction::edit(format!("/admin/orders/edit/{}", id)),
                        RowAction::delete(
                            format!("/admin/orders/delete/{}", id),
                            "Bạn có chắc chắn muốn xóa?",
                        ),
                    ] />
                </td>
            </tr>
        }
        .into_any()
    }
}

#[component]
pub fn OrderListPage() -> impl IntoView {
    list_page::<OrderList>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_badge() {
        let (class, icon, text) = status_badge("SHIPPED");
        assert_eq!(class, "bg-secondary-subtle text-secondary");
        assert_eq!(icon, "truck");
        assert_eq!(text, "Đang giao hàng");
    }

    #[test]
    fn test_unknown_status_shows_raw_code() {
        let (class, icon, text) = status_badge("RETURNED");
        assert_eq!(class, "bg-secondary");
        assert_eq!(icon, "question-circle");
        assert_eq!(text, "RETURNED");
    }

    #[test]
    fn test_status_options_cover_every_status() {
        assert_eq!(STATUS_OPTIONS.len(), OrderStatus::all().len());
        for (code, label) in STATUS_OPTIONS {
            let status = OrderStatus::from_code(code).unwrap();
            assert_eq!(status.display_name(), *label);
        }
    }
}
