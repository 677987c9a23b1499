pub mod left;

use leptos::prelude::*;

/// Admin shell: collapsible sidebar on the left, routed page on the right.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |          Content             |
/// |  (Left)   |   (current route's page)     |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let left_open = RwSignal::new(true);

    view! {
        <div class="app-layout d-flex">
            <left::Left open=left_open>
                <left::Sidebar />
            </left::Left>
            <main class="app-main flex-grow-1 bg-light min-vh-100">
                <div class="border-bottom bg-white px-3 py-2">
                    <button
                        type="button"
                        class="btn btn-sm btn-light"
                        title="Ẩn/hiện menu"
                        on:click=move |_| left_open.update(|open| *open = !*open)
                    >
                        <i class="bi bi-list"></i>
                    </button>
                </div>
                {children()}
            </main>
        </div>
    }
}
