use crate::routes::routes::AppRoutes;
use crate::shared::config::AdminConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Host page settings (API base, debounce override, filter options)
    provide_context(AdminConfig::from_document());

    view! {
        <AppRoutes />
    }
}
