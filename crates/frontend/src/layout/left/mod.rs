pub mod sidebar;

pub use sidebar::Sidebar;

use leptos::prelude::*;

#[component]
pub fn Left(open: RwSignal<bool>, children: Children) -> impl IntoView {
    view! {
        <aside
            data-zone="left"
            class=move || {
                if open.get() {
                    "app-sidebar bg-white border-end"
                } else {
                    "app-sidebar bg-white border-end d-none"
                }
            }
        >
            {children()}
        </aside>
    }
}
