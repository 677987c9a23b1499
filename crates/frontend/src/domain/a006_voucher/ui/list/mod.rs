use crate::shared::components::table::number_format::format_number_vi;
use crate::shared::components::ui::{IconBadge, RowAction, RowActions};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon_with;
use crate::shared::list_page::{list_page, Column, FilterField, ListEntity};
use crate::shared::list_utils::{compare_f64, SortState, Sortable};
use contracts::domain::a006_voucher::dto::VoucherRow;
use leptos::prelude::*;
use std::cmp::Ordering;

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("active", "Đang hoạt động"),
    ("inactive", "Vô hiệu"),
    ("expired", "Hết hạn"),
    ("valid", "Còn hiệu lực"),
];

/// `1.500.000đ`; missing or zero amounts have no display value
pub fn format_amount(value: Option<f64>) -> Option<String> {
    value
        .filter(|v| *v != 0.0)
        .map(|v| format!("{}đ", format_number_vi(v, 3)))
}

impl Sortable for VoucherRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        // Missing amounts sort as zero
        let key = |row: &VoucherRow| match field {
            "discountPercent" => row.discount_percent,
            "maxDiscountAmount" => row.max_discount_amount.unwrap_or(0.0),
            "minOrderValue" => row.min_order_value.unwrap_or(0.0),
            "usedCount" => row.used() as f64,
            _ => 0.0,
        };
        compare_f64(key(self), key(other))
    }
}

fn amount_cell(value: Option<f64>) -> AnyView {
    match format_amount(value) {
        Some(text) => view! { <span>{text}</span> }.into_any(),
        None => view! { <span class="text-muted">"---"</span> }.into_any(),
    }
}

pub struct VoucherList;

impl ListEntity for VoucherList {
    type Row = VoucherRow;

    const ENDPOINT: &'static str = "/admin/vouchers/api/search";
    const TITLE: &'static str = "Voucher";
    const NOUN: &'static str = "voucher";
    const EMPTY_TEXT: &'static str = "Không tìm thấy voucher nào";
    const EMPTY_ICON: &'static str = "ticket-perforated";

    fn filters() -> Vec<FilterField> {
        vec![
            FilterField::keyword("Mã hoặc mô tả voucher..."),
            FilterField::select("status", "Trạng thái", "Tất cả trạng thái", STATUS_OPTIONS),
        ]
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::with_class("ID", "ps-4"),
            Column::new("Mã voucher"),
            Column::new("Mô tả"),
            Column::with_class("Giảm (%)", "text-center").sort_by("discountPercent"),
            Column::with_class("Giảm tối đa", "text-end").sort_by("maxDiscountAmount"),
            Column::with_class("Đơn tối thiểu", "text-end").sort_by("minOrderValue"),
            Column::with_class("Đã dùng", "text-center").sort_by("usedCount"),
            Column::with_class("Trạng thái", "text-center"),
            Column::with_class("Thao tác", "text-center"),
        ]
    }

    fn render_row(row: &VoucherRow) -> AnyView {
        let validity = row.validity();
        let limit = match row.usage_limit {
            Some(limit) if limit > 0 => view! { <span>{limit}</span> }.into_any(),
            _ => view! { <span class="text-muted">"∞"</span> }.into_any(),
        };
        let expiry = row
            .end_at
            .map(|end| view! { <small class="text-muted">"HSD: "{format_date(&end)}</small> });
        let description = row.description.clone().unwrap_or_default();
        let title = description.clone();

        let id = row.id;
        view! {
            <tr>
                <td class="ps-4 fw-semibold text-muted">{id}</td>
                <td>
                    <div class="d-flex align-items-center">
                        <div class="bg-success bg-opacity-10 rounded-2 p-2 me-2">
                            {icon_with("ticket-perforated-fill", "text-success")}
                        </div>
                        <div>
                            <div class="fw-bold text-uppercase">{row.code.to_uppercase()}</div>
                            {expiry}
                        </div>
                    </div>
                </td>
                <td>
                    <span class="text-truncate d-inline-block" style="max-width: 200px"
                        title=title>
                        {description}
                    </span>
                </td>
                <td class="text-center">
                    <span class="badge bg-success fs-6">
                        {format!("{}%", format_number_vi(row.discount_percent, 2))}
                    </span>
                </td>
                <td class="text-end">{amount_cell(row.max_discount_amount)}</td>
                <td class="text-end">{amount_cell(row.min_order_value)}</td>
                <td class="text-center">
                    <span>{row.used()}</span>" / "{limit}
                </td>
                <td class="text-center">
                    <IconBadge
                        class=validity.badge_class()
                        icon=validity.icon()
                        text=validity.display_name()
                    />
                </td>
                <td class="text-center">
                    <RowActions actions=vec![
                        RowAction::view(format!("/admin/vouchers/view/{}", id)),
                        RowAction::edit(format!("/admin/vouchers/edit/{}", id)).after_divider(),
                        RowAction::delete(
                            format!("/admin/vouchers/delete/{}", id),
                            "Bạn có chắc chắn muốn xóa voucher này?",
                        ),
                    ] />
                </td>
            </tr>
        }
        .into_any()
    }

    fn sort_rows(rows: &mut [VoucherRow], sort: &SortState) {
        sort.apply(rows);
    }
}

#[component]
pub fn VoucherListPage() -> impl IntoView {
    list_page::<VoucherList>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn voucher(id: i64, percent: f64, max: Option<f64>, used: Option<u32>) -> VoucherRow {
        VoucherRow {
            id,
            code: format!("v{}", id),
            description: None,
            discount_percent: percent,
            max_discount_amount: max,
            min_order_value: None,
            used_count: used,
            usage_limit: None,
            end_at: None,
            is_active: true,
            valid: true,
        }
    }

    fn ids(rows: &[VoucherRow]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(1500000.0)), Some("1.500.000đ".to_string()));
        assert_eq!(format_amount(Some(0.0)), None);
        assert_eq!(format_amount(None), None);
    }

    #[test]
    fn test_sort_by_percent_toggles_direction() {
        let mut rows = vec![
            voucher(1, 10.0, None, None),
            voucher(2, 30.0, None, None),
            voucher(3, 5.0, None, None),
        ];
        let mut sort = SortState::default();

        sort.toggle("discountPercent");
        VoucherList::sort_rows(&mut rows, &sort);
        assert_eq!(ids(&rows), vec![3, 1, 2]);

        sort.toggle("discountPercent");
        VoucherList::sort_rows(&mut rows, &sort);
        assert_eq!(ids(&rows), vec![2, 1, 3]);
    }

    #[test]
    fn test_missing_values_sort_as_zero() {
        let mut rows = vec![
            voucher(1, 10.0, Some(50000.0), Some(4)),
            voucher(2, 10.0, None, None),
            voucher(3, 10.0, Some(20000.0), Some(1)),
        ];
        let mut sort = SortState::default();

        sort.toggle("maxDiscountAmount");
        VoucherList::sort_rows(&mut rows, &sort);
        assert_eq!(ids(&rows), vec![2, 3, 1]);

        sort.toggle("usedCount");
        VoucherList::sort_rows(&mut rows, &sort);
        assert_eq!(ids(&rows), vec![2, 3, 1]);
    }

    #[test]
    fn test_render_row_with_description() {
        let owner = Owner::new();
        owner.with(|| {
            let mut row = voucher(4, 12.5, Some(100000.0), Some(3));
            row.description = Some("Giảm giá mùa hè cho toàn bộ áo thun".into());
            row.usage_limit = Some(10);
            let _ = VoucherList::render_row(&row);
            let _ = VoucherList::render_row(&voucher(5, 5.0, None, None));
        });
    }

    #[test]
    fn test_no_sort_keeps_server_order() {
        let mut rows = vec![voucher(2, 1.0, None, None), voucher(1, 9.0, None, None)];
        VoucherList::sort_rows(&mut rows, &SortState::default());
        assert_eq!(ids(&rows), vec![2, 1]);
    }
}
