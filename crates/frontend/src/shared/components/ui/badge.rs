use crate::shared::icons::icon_with;
use leptos::prelude::*;

/// Badge with an optional leading icon, styled by Bootstrap utility classes
#[component]
pub fn IconBadge(
    /// Colour classes, e.g. "bg-success-subtle text-success"
    #[prop(into)]
    class: String,
    /// Bootstrap icon name without the `bi-` prefix
    #[prop(optional)]
    icon: Option<&'static str>,
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! {
        <span class=format!("badge {}", class)>
            {icon.map(|name| icon_with(name, "me-1"))}
            {text}
        </span>
    }
}

/// Active/inactive badge shared by categories, products and users
#[component]
pub fn ActiveBadge(
    active: bool,
    /// Label for the inactive state ("Vô hiệu", "Ngưng bán", ...)
    #[prop(optional)]
    inactive_text: Option<&'static str>,
) -> impl IntoView {
    if active {
        view! {
            <IconBadge class="bg-success-subtle text-success" icon="check-circle" text="Hoạt động" />
        }
        .into_any()
    } else {
        let text = inactive_text.unwrap_or("Vô hiệu");
        view! {
            <IconBadge class="bg-secondary-subtle text-secondary" icon="x-circle" text=text />
        }
        .into_any()
    }
}
