//! Clickable `<th>` that toggles client-side sorting
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Giảm (%)"
//!     sort_field="discountPercent"
//!     sort=sort.read_only()
//!     on_sort=Callback::new(move |field: String| sort.update(|s| s.toggle(&field)))
//! />
//! ```

use crate::shared::list_utils::{sort_icon_class, SortState};
use leptos::prelude::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    sort_field: &'static str,
    #[prop(into)] sort: Signal<SortState>,
    on_sort: Callback<String>,
    /// Extra classes for the `<th>`
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <th class=format!("sortable {}", class) style="cursor: pointer;"
            on:click=move |_| on_sort.run(sort_field.to_string())
        >
            {label}
            " "
            <i class=move || sort.with(|s| sort_icon_class(s, sort_field))></i>
        </th>
    }
}
