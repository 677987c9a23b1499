use crate::shared::icons::icon_with;
use leptos::prelude::*;

/// One entry of a row's action menu
#[derive(Debug, Clone)]
pub struct RowAction {
    pub label: &'static str,
    pub icon: &'static str,
    /// Icon colour, or the whole item's for destructive actions
    pub tone: &'static str,
    pub href: String,
    /// Asked before following the link
    pub confirm: Option<&'static str>,
    pub danger: bool,
    /// Separator drawn above this entry
    pub divider_before: bool,
}

impl RowAction {
    pub fn view(href: String) -> Self {
        Self {
            label: "Xem chi tiết",
            icon: "eye",
            tone: "text-info",
            href,
            confirm: None,
            danger: false,
            divider_before: false,
        }
    }

    pub fn edit(href: String) -> Self {
        Self {
            label: "Chỉnh sửa",
            icon: "pencil-square",
            tone: "text-primary",
            href,
            confirm: None,
            danger: false,
            divider_before: false,
        }
    }

    pub fn delete(href: String, confirm: &'static str) -> Self {
        Self {
            label: "Xóa",
            icon: "trash3",
            tone: "",
            href,
            confirm: Some(confirm),
            danger: true,
            divider_before: true,
        }
    }

    pub fn confirmed(
        label: &'static str,
        icon: &'static str,
        tone: &'static str,
        href: String,
        confirm: &'static str,
    ) -> Self {
        Self {
            label,
            icon,
            tone,
            href,
            confirm: Some(confirm),
            danger: false,
            divider_before: false,
        }
    }

    pub fn after_divider(mut self) -> Self {
        self.divider_before = true;
        self
    }
}

fn confirmed(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Three-dot dropdown shown in the last column of every admin table
#[component]
pub fn RowActions(actions: Vec<RowAction>) -> impl IntoView {
    let items = actions
        .into_iter()
        .map(|action| {
            let class = if action.danger {
                "dropdown-item d-flex align-items-center py-2 px-3 text-danger"
            } else {
                "dropdown-item d-flex align-items-center py-2 px-3"
            };
            let icon_class = format!("{} me-2", action.tone);
            let confirm = action.confirm;
            view! {
                {action.divider_before.then(|| view! { <li><hr class="dropdown-divider my-1" /></li> })}
                <li>
                    <a
                        class=class
                        href=action.href
                        on:click=move |ev| {
                            if let Some(message) = confirm {
                                if !confirmed(message) {
                                    ev.prevent_default();
                                }
                            }
                        }
                    >
                        {icon_with(action.icon, &icon_class)}
                        {action.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="dropdown">
            <button
                class="btn btn-sm btn-light border-0 rounded-circle d-inline-flex align-items-center justify-content-center"
                style="width: 34px; height: 34px"
                type="button"
                data-bs-toggle="dropdown"
            >
                {icon_with("three-dots-vertical", "")}
            </button>
            <ul class="dropdown-menu dropdown-menu-end shadow-sm border-0 py-2" style="min-width: 160px">
                {items}
            </ul>
        </div>
    }
}
