use crate::shared::components::table::number_format::format_money;
use crate::shared::components::ui::{IconBadge, RowAction, RowActions};
use crate::shared::icons::icon_with;
use crate::shared::list_page::{list_page, Column, FilterField, ListEntity};
use contracts::domain::a003_product::dto::ProductRow;
use leptos::prelude::*;

const STOCK_OPTIONS: &[(&str, &str)] = &[("in_stock", "Còn hàng"), ("out_of_stock", "Hết hàng")];

const ACTIVE_OPTIONS: &[(&str, &str)] = &[("true", "Đang bán"), ("false", "Ngưng bán")];

fn stock_badge(row: &ProductRow) -> (&'static str, String) {
    if row.in_stock() {
        ("bg-success", format!("{} sp", row.stock))
    } else {
        ("bg-danger", "Hết hàng".to_string())
    }
}

pub struct ProductList;

impl ListEntity for ProductList {
    type Row = ProductRow;

    const ENDPOINT: &'static str = "/admin/products/api/search";
    const TITLE: &'static str = "Sản phẩm";
    const NOUN: &'static str = "sản phẩm";
    const EMPTY_TEXT: &'static str = "Không tìm thấy sản phẩm nào";
    const EMPTY_ICON: &'static str = "box-seam";

    fn filters() -> Vec<FilterField> {
        vec![
            FilterField::keyword("Tên sản phẩm hoặc SKU..."),
            FilterField::host_select("categoryId", "Danh mục", "Tất cả danh mục"),
            FilterField::select("stock", "Tồn kho", "Tất cả", STOCK_OPTIONS),
            FilterField::select("isActive", "Trạng thái", "Tất cả trạng thái", ACTIVE_OPTIONS),
        ]
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::with_class("Sản phẩm", "ps-4"),
            Column::new("Danh mục"),
            Column::new("Giá bán"),
            Column::with_class("Tồn kho", "text-center"),
            Column::with_class("Trạng thái", "text-center"),
            Column::with_class("Thao tác", "text-center"),
        ]
    }

    fn render_row(row: &ProductRow) -> AnyView {
        let image = match row.main_image_url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => view! {
                <img src=url.to_string() alt=row.product_name.clone() class="rounded border"
                    style="width: 48px; height: 48px; object-fit: cover;" />
            }
            .into_any(),
            None => view! {
                <div class="bg-light rounded border d-flex align-items-center justify-content-center"
                    style="width: 48px; height: 48px">
                    {icon_with("image", "text-muted")}
                </div>
            }
            .into_any(),
        };

        let category = match &row.category_name {
            Some(name) => view! {
                <span class="badge bg-info-subtle text-info">{name.clone()}</span>
            }
            .into_any(),
            None => view! { <span class="text-muted">"N/A"</span> }.into_any(),
        };

        let (stock_class, stock_text) = stock_badge(row);
        let (active_class, active_text) = if row.is_active() {
            ("bg-success", "Hoạt động")
        } else {
            ("bg-danger", "Ngưng bán")
        };

        let id = row.id;
        view! {
            <tr>
                <td class="ps-4">
                    <div class="d-flex align-items-center">
                        <div class="me-3">{image}</div>
                        <div>
                            <div class="fw-bold">{row.product_name.clone()}</div>
                            <small class="text-muted">
                                {icon_with("upc-scan", "me-1")}
                                <code>{row.sku.clone().unwrap_or_default()}</code>
                            </small>
                        </div>
                    </div>
                </td>
                <td>{category}</td>
                <td class="fw-bold">{format!("{} ₫", format_money(row.price))}</td>
                <td class="text-center">
                    <IconBadge class=stock_class text=stock_text />
                </td>
                <td class="text-center">
                    <IconBadge class=active_class text=active_text />
                </td>
                <td class="text-center">
                    <RowActions actions=vec![
                        RowAction::view(format!("/admin/products/{}", id)),
                        RowAction::edit(format!("/admin/products/edit/{}", id)),
                    ] />
                </td>
            </tr>
        }
        .into_any()
    }
}

#[component]
pub fn ProductListPage() -> impl IntoView {
    list_page::<ProductList>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i64) -> ProductRow {
        ProductRow {
            id: 1,
            sku: Some("SP-001".into()),
            product_name: "Áo thun".into(),
            category_name: None,
            price: 199000.0,
            stock,
            main_image_url: None,
            is_active: Some(true),
        }
    }

    #[test]
    fn test_stock_badge() {
        assert_eq!(stock_badge(&product(12)), ("bg-success", "12 sp".to_string()));
        assert_eq!(stock_badge(&product(0)), ("bg-danger", "Hết hàng".to_string()));
    }

    #[test]
    fn test_filter_keys_match_search_parameters() {
        assert_eq!(
            ProductList::filter_keys(),
            vec!["keyword", "categoryId", "stock", "isActive"]
        );
    }
}
