//! Generic searchable, paginated admin table.
//!
//! Each entity page supplies a [`ListEntity`]; this module owns the filter
//! bar, debounced keyword search, request sequencing, table body states,
//! the result caption, pagination and the address-bar query.

pub mod entity;
pub mod query;
pub mod state;

pub use entity::{Column, FilterField, FilterKind, ListEntity, OptionSource};
pub use query::ListQuery;
pub use state::{ListPhase, ListState, TableBody};

use crate::shared::api_utils::with_query;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::{use_config, FilterOption};
use crate::shared::debounce::Debouncer;
use crate::shared::history;
use crate::shared::http::get_json;
use crate::shared::icons::icon_with;
use crate::shared::list_utils::SortState;
use contracts::shared::page::PageEnvelope;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub fn list_page<E: ListEntity>() -> impl IntoView {
    let config = use_config();
    let debounce_ms = config.debounce_or(E::DEBOUNCE_MS);
    let endpoint = StoredValue::new(config.url(E::ENDPOINT));

    let fields = E::filters();
    let columns = E::columns();
    let column_count = columns.len().to_string();

    let initial = ListQuery::from_query_string(&E::filter_keys(), &history::current_query());
    let state = RwSignal::new(ListState::<E::Row>::new(initial));
    let sort = RwSignal::new(SortState::default());
    let debouncer = StoredValue::new(Debouncer::new());

    let load = move || {
        let Some((ticket, query)) = state.try_update(|s| {
            let ticket = s.begin();
            (ticket, s.query.to_query_string())
        }) else {
            return;
        };
        let url = with_query(&endpoint.get_value(), &query);
        log::debug!("{}: GET {}", E::TITLE, url);

        spawn_local(async move {
            let result = get_json::<PageEnvelope<E::Row>>(&url).await;
            let succeeded = result.is_ok();
            if let Err(e) = &result {
                log::error!("{}: search failed: {}", E::TITLE, e);
            }
            match state.try_update(|s| s.complete(ticket, result)) {
                Some(true) => {
                    if succeeded {
                        history::replace_query(&query);
                    }
                }
                Some(false) => log::debug!("{}: dropped stale response for {}", E::TITLE, query),
                // Page unmounted while the request was in flight
                None => {}
            }
        });
    };

    // Select changes, Enter, submit and page links bypass the debounce
    let search_now = move || {
        debouncer.with_value(|d| d.cancel());
        load();
    };

    let on_keyword = move |key: &'static str, value: String| {
        state.update(|s| s.query.set_filter(key, value));
        debouncer.with_value(|d| d.trigger(debounce_ms, load));
    };

    let on_select = move |key: &'static str, value: String| {
        state.update(|s| s.query.set_filter(key, value));
        search_now();
    };

    let on_page_change = Callback::new(move |page: u32| {
        state.update(|s| s.query.set_page(page));
        search_now();
    });

    let on_sort = Callback::new(move |field: String| sort.update(|s| s.toggle(&field)));

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded()) {
            load();
        }
    });

    on_cleanup(move || debouncer.with_value(|d| d.cancel()));

    let loading = Signal::derive(move || state.with(|s| s.is_loading()));

    let filter_controls = fields
        .into_iter()
        .map(|field| {
            let key = field.key;
            let current = move || state.with(|s| s.query.value(key).to_string());
            match field.kind {
                FilterKind::Keyword { placeholder } => view! {
                    <div class="col-md-4">
                        <label class="form-label small text-muted mb-1">{field.label}</label>
                        <div class="input-group">
                            <span class="input-group-text">{icon_with("search", "")}</span>
                            <input
                                type="text"
                                class="form-control"
                                name=key
                                placeholder=placeholder
                                autocomplete="off"
                                prop:value=current
                                on:input=move |ev| on_keyword(key, event_target_value(&ev))
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        state.update(|s| s.query.set_page(1));
                                        search_now();
                                    }
                                }
                            />
                        </div>
                    </div>
                }
                .into_any(),
                FilterKind::Select { all_label, options } => {
                    let options: Vec<FilterOption> = match options {
                        OptionSource::Static(pairs) => pairs
                            .iter()
                            .map(|(value, label)| FilterOption {
                                value: value.to_string(),
                                label: label.to_string(),
                            })
                            .collect(),
                        OptionSource::Host => config.options_for(key).to_vec(),
                    };
                    view! {
                        <div class="col-md-2">
                            <label class="form-label small text-muted mb-1">{field.label}</label>
                            <select
                                class="form-select"
                                name=key
                                prop:value=current
                                on:change=move |ev| on_select(key, event_target_value(&ev))
                            >
                                <option value="">{all_label}</option>
                                {options
                                    .into_iter()
                                    .map(|o| {
                                        let value = o.value.clone();
                                        let selected = move || state.with(|s| s.query.value(key) == value);
                                        view! { <option value=o.value selected=selected>{o.label}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    }
                    .into_any()
                }
            }
        })
        .collect_view();

    let header_cells = columns
        .into_iter()
        .map(|column| match column.sort_key {
            Some(field) => view! {
                <SortableHeaderCell
                    label=column.label
                    sort_field=field
                    sort=sort
                    on_sort=on_sort
                    class=column.class
                />
            }
            .into_any(),
            None => view! { <th class=column.class>{column.label}</th> }.into_any(),
        })
        .collect_view();

    let body = move || {
        state.with(|s| match s.body() {
            TableBody::Loading => view! {
                <tr>
                    <td colspan=column_count.clone() class="text-center py-4">
                        <div class="spinner-border spinner-border-sm text-primary me-2" role="status"></div>
                        "Đang tìm kiếm..."
                    </td>
                </tr>
            }
            .into_any(),
            TableBody::Empty => view! {
                <tr>
                    <td colspan=column_count.clone() class="text-center py-5">
                        <div class="text-muted">
                            {icon_with(E::EMPTY_ICON, "display-4 d-block mb-3")}
                            <p class="mb-0">{E::EMPTY_TEXT}</p>
                        </div>
                    </td>
                </tr>
            }
            .into_any(),
            TableBody::Error => {
                let message = s.error_message().unwrap_or_default().to_string();
                view! {
                    <tr>
                        <td colspan=column_count.clone() class="text-center py-4 text-danger">
                            {icon_with("exclamation-triangle", "me-2")}
                            {message}
                        </td>
                    </tr>
                }
                .into_any()
            }
            TableBody::Rows => {
                let mut rows = s.rows().to_vec();
                sort.with(|order| E::sort_rows(&mut rows, order));
                rows.iter().map(E::render_row).collect_view().into_any()
            }
        })
    };

    view! {
        <div class="container-fluid py-3">
            <div class="d-flex align-items-center justify-content-between mb-3">
                <div class="d-flex align-items-center gap-2">
                    <h4 class="mb-0">{E::TITLE}</h4>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || state.with(|s| s.total_elements().to_string())}
                    </Badge>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| load()
                    disabled=loading
                >
                    {move || if loading.get() { "Đang tải..." } else { "Làm mới" }}
                </Button>
            </div>

            <div class="card shadow-sm mb-3">
                <div class="card-body">
                    <form
                        class="row g-2 align-items-end"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            state.update(|s| s.query.set_page(1));
                            search_now();
                        }
                    >
                        {filter_controls}
                        <div class="col-auto ms-auto small text-muted">
                            {move || {
                                let n = state.with(|s| s.query.active_filter_count());
                                (n > 0).then(|| format!("{} bộ lọc đang áp dụng", n))
                            }}
                        </div>
                    </form>
                </div>
            </div>

            <div class="card shadow-sm">
                <div class="table-responsive">
                    <table class="table table-hover align-middle mb-0">
                        <thead class="table-light">
                            <tr>{header_cells}</tr>
                        </thead>
                        <tbody>{body}</tbody>
                    </table>
                </div>
                <div class="card-footer d-flex align-items-center justify-content-between">
                    <div class="small text-muted">
                        {move || state.with(|s| s.caption(E::NOUN))}
                    </div>
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.current_page()))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                        on_page_change=on_page_change
                    />
                </div>
            </div>
        </div>
    }
}
