use crate::shared::components::ui::{ActiveBadge, RowAction, RowActions};
use crate::shared::icons::icon_with;
use crate::shared::list_page::{list_page, Column, FilterField, ListEntity};
use contracts::domain::a001_category::dto::CategoryRow;
use leptos::prelude::*;

const STATUS_OPTIONS: &[(&str, &str)] = &[("active", "Hoạt động"), ("inactive", "Vô hiệu")];

pub struct CategoryList;

impl ListEntity for CategoryList {
    type Row = CategoryRow;

    const ENDPOINT: &'static str = "/admin/categories/api/search";
    const TITLE: &'static str = "Danh mục";
    const NOUN: &'static str = "danh mục";
    const EMPTY_TEXT: &'static str = "Không tìm thấy danh mục nào";
    const EMPTY_ICON: &'static str = "folder2-open";

    fn filters() -> Vec<FilterField> {
        vec![
            FilterField::keyword("Tìm theo tên hoặc slug..."),
            FilterField::select("status", "Trạng thái", "Tất cả trạng thái", STATUS_OPTIONS),
            FilterField::host_select("parentSlug", "Danh mục cha", "Tất cả danh mục cha"),
        ]
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::with_class("ID", "ps-4"),
            Column::new("Danh mục"),
            Column::new("Slug"),
            Column::new("Danh mục cha"),
            Column::with_class("Trạng thái", "text-center"),
            Column::with_class("Thao tác", "text-center"),
        ]
    }

    fn render_row(row: &CategoryRow) -> AnyView {
        let thumbnail = match row.image() {
            Some(url) => view! {
                <img src=url.to_string() alt="Category image" class="rounded"
                    style="width: 50px; height: 50px; object-fit: cover;" />
            }
            .into_any(),
            None => view! {
                <div class="bg-primary bg-opacity-10 rounded d-flex align-items-center justify-content-center"
                    style="width: 50px; height: 50px">
                    {icon_with("folder-fill", "text-primary fs-5")}
                </div>
            }
            .into_any(),
        };

        let parent = match &row.parent_category {
            Some(parent) => view! {
                <span class="badge bg-info-subtle text-info">{parent.category_name.clone()}</span>
            }
            .into_any(),
            None => view! {
                <span class="text-muted small">{icon_with("dash-circle", "")}" Root"</span>
            }
            .into_any(),
        };

        let id = row.id;
        view! {
            <tr>
                <td class="ps-4 fw-semibold text-muted">{id}</td>
                <td>
                    <div class="d-flex align-items-center">
                        <div class="me-3">{thumbnail}</div>
                        <div class="fw-bold">{row.category_name.clone()}</div>
                    </div>
                </td>
                <td><code class="text-muted small">{row.slug.clone()}</code></td>
                <td>{parent}</td>
                <td class="text-center"><ActiveBadge active=row.is_active /></td>
                <td class="text-center">
                    <RowActions actions=vec![
                        RowAction::view(format!("/admin/categories/view/{}", id)),
                        RowAction::edit(format!("/admin/categories/edit/{}", id)),
                        RowAction::delete(
                            format!("/admin/categories/delete/{}", id),
                            "Bạn có chắc chắn muốn xóa danh mục này?",
                        ),
                    ] />
                </td>
            </tr>
        }
        .into_any()
    }
}

#[component]
pub fn CategoryListPage() -> impl IntoView {
    list_page::<CategoryList>()
}
