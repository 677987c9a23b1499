use crate::shared::components::ui::{ActiveBadge, RowAction, RowActions};
use crate::shared::icons::icon_with;
use crate::shared::list_page::{list_page, Column, FilterField, ListEntity};
use contracts::domain::a005_user::dto::UserRow;
use leptos::prelude::*;

const STATUS_OPTIONS: &[(&str, &str)] = &[("active", "Hoạt động"), ("inactive", "Vô hiệu")];

pub struct UserList;

impl ListEntity for UserList {
    type Row = UserRow;

    const ENDPOINT: &'static str = "/api/admin/users/search";
    const TITLE: &'static str = "Người dùng";
    const NOUN: &'static str = "người dùng";
    const EMPTY_TEXT: &'static str = "Không tìm thấy người dùng nào";
    const DEBOUNCE_MS: u32 = 300;

    fn filters() -> Vec<FilterField> {
        vec![
            FilterField::keyword("Tên, email hoặc số điện thoại..."),
            FilterField::select("status", "Trạng thái", "Tất cả trạng thái", STATUS_OPTIONS),
            FilterField::host_select("roleId", "Vai trò", "Tất cả vai trò"),
        ]
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::with_class("ID", "ps-4"),
            Column::new("Người dùng"),
            Column::new("Email"),
            Column::new("Điện thoại"),
            Column::new("Vai trò"),
            Column::with_class("Trạng thái", "text-center"),
            Column::with_class("Thao tác", "text-center"),
        ]
    }

    fn render_row(row: &UserRow) -> AnyView {
        let role = row
            .role_display_name
            .clone()
            .unwrap_or_else(|| "N/A".to_string());
        let id = row.id;
        view! {
            <tr>
                <td class="ps-4 fw-semibold text-muted">{id}</td>
                <td>
                    <div class="d-flex align-items-center">
                        <div class="bg-primary bg-opacity-10 rounded-circle d-flex align-items-center justify-content-center me-3"
                            style="width: 40px; height: 40px">
                            {icon_with("person", "text-primary")}
                        </div>
                        <div>
                            <div class="fw-semibold">{row.full_name.clone().unwrap_or_default()}</div>
                            <small class="text-muted">{row.gender.clone().unwrap_or_default()}</small>
                        </div>
                    </div>
                </td>
                <td>{icon_with("envelope", "text-muted me-1")}{row.email.clone()}</td>
                <td>{icon_with("telephone", "text-muted me-1")}{row.phone.clone().unwrap_or_default()}</td>
                <td>
                    <span class=format!("badge rounded-pill {}", row.role_badge_class())>{role}</span>
                </td>
                <td class="text-center"><ActiveBadge active=row.is_active() /></td>
                <td class="text-center">
                    <RowActions actions=vec![
                        RowAction::view(format!("/admin/users/view/{}", id)),
                        RowAction::edit(format!("/admin/users/edit/{}", id)),
                        RowAction::delete(
                            format!("/admin/users/delete/{}", id),
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
pub fn UserListPage() -> impl IntoView {
    list_page::<UserList>()
}
