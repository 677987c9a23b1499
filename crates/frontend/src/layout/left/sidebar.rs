//! Sidebar with collapsible menu groups

use crate::shared::icons::{icon, icon_with};
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Quản lý",
            icon: "grid",
            items: vec![
                ("/admin/categories", "Danh mục", "folder2"),
                ("/admin/products", "Sản phẩm", "box-seam"),
                ("/admin/orders", "Đơn hàng", "receipt"),
                ("/admin/reviews", "Đánh giá", "star"),
                ("/admin/users", "Người dùng", "people"),
                ("/admin/vouchers", "Voucher", "ticket-perforated"),
            ],
        },
        MenuGroup {
            id: "analytics",
            label: "Thống kê",
            icon: "bar-chart",
            items: vec![
                ("/admin/categories/analytics", "Phân tích danh mục", "bar-chart-line"),
                ("/admin/orders/statistics", "Thống kê đơn hàng", "graph-up"),
                ("/admin/products/statistics", "Thống kê sản phẩm", "pie-chart"),
                ("/admin/users/analytics", "Phân tích người dùng", "person-lines-fill"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <nav class="app-sidebar__content p-2">
            <a href="/admin" class="d-flex align-items-center px-2 py-3 mb-2 text-decoration-none fw-bold">
                {icon_with("shop", "me-2 text-primary")}
                "Admin"
            </a>
            {groups
                .into_iter()
                .map(|group| {
                    let id = group.id;
                    view! {
                        <div class="mb-2">
                            <div
                                class="app-sidebar__item d-flex align-items-center justify-content-between px-2 py-2 text-muted small text-uppercase"
                                style="cursor: pointer;"
                                on:click=move |_| {
                                    expanded_groups.update(|items| {
                                        if let Some(pos) = items.iter().position(|x| *x == id) {
                                            items.remove(pos);
                                        } else {
                                            items.push(id);
                                        }
                                    });
                                }
                            >
                                <span>{icon_with(group.icon, "me-2")}{group.label}</span>
                                {move || {
                                    if expanded_groups.with(|items| items.contains(&id)) {
                                        icon("chevron-down")
                                    } else {
                                        icon("chevron-right")
                                    }
                                }}
                            </div>
                            <Show when=move || expanded_groups.with(|items| items.contains(&id))>
                                <ul class="nav flex-column">
                                    {group
                                        .items
                                        .iter()
                                        .map(|&(href, label, icon_name)| {
                                            view! {
                                                <li class="nav-item">
                                                    <A href=href attr:class="nav-link app-sidebar__link d-flex align-items-center">
                                                        {icon_with(icon_name, "me-2")}
                                                        <span>{label}</span>
                                                    </A>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
