//! Analytics charts: fetch an aggregate series, rebuild the chart.

pub mod backend;
pub mod config;
pub mod slot;

pub use backend::{ChartBackend, ChartError, ChartJsBackend};
pub use config::{ChartConfig, ChartKind, Dataset, Paint, TooltipFormat};
pub use slot::ChartSlot;

use crate::shared::debounce::Generation;
use crate::shared::http::get_json;
use crate::shared::icons::icon_with;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

pub const CHART_FAILED_TEXT: &str = "Không thể tải dữ liệu biểu đồ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartStatus {
    Loading,
    Ready,
    Empty(String),
    /// Technical detail shown under the generic failure text
    Failed(String),
}

/// Loads data into one canvas. Copyable into event handlers.
#[derive(Clone, Copy)]
pub struct ChartLoader {
    slot: StoredValue<ChartSlot<ChartJsBackend>, LocalStorage>,
    generation: StoredValue<Generation>,
    pub status: RwSignal<ChartStatus>,
    canvas_id: &'static str,
    empty_text: &'static str,
}

impl ChartLoader {
    pub fn new(canvas_id: &'static str, empty_text: &'static str) -> Self {
        Self {
            slot: StoredValue::new_local(ChartSlot::new(ChartJsBackend, canvas_id)),
            generation: StoredValue::new(Generation::new()),
            status: RwSignal::new(ChartStatus::Loading),
            canvas_id,
            empty_text,
        }
    }

    pub fn canvas_id(&self) -> &'static str {
        self.canvas_id
    }

    /// Fetches `url` and draws what `build` makes of it. `None` from `build`
    /// means there is nothing to draw. A newer `load` supersedes this one.
    pub fn load<T, F>(self, url: String, build: F)
    where
        T: DeserializeOwned + 'static,
        F: FnOnce(T) -> Option<ChartConfig> + 'static,
    {
        let ticket = self.generation.with_value(|g| g.next());
        self.status.set(ChartStatus::Loading);
        log::debug!("chart #{}: GET {}", self.canvas_id, url);

        spawn_local(async move {
            let result = get_json::<T>(&url).await;
            let current = self
                .generation
                .try_with_value(|g| g.is_current(ticket))
                .unwrap_or(false);
            if !current {
                log::debug!("chart #{}: dropped stale response", self.canvas_id);
                return;
            }

            let status = match result {
                Ok(data) => match self.draw(build(data)) {
                    Some(status) => status,
                    None => return,
                },
                Err(e) => {
                    log::error!("chart #{}: loading failed: {}", self.canvas_id, e);
                    self.slot.try_with_value(|slot| slot.clear());
                    ChartStatus::Failed(e.to_string())
                }
            };
            let _ = self.status.try_set(status);
        });
    }

    /// Draws data the host page already provided, superseding any pending `load`.
    pub fn show(self, built: Option<ChartConfig>) {
        self.generation.with_value(|g| g.invalidate());
        if let Some(status) = self.draw(built) {
            self.status.set(status);
        }
    }

    /// `None` once the owning page is gone
    fn draw(&self, built: Option<ChartConfig>) -> Option<ChartStatus> {
        match built {
            Some(config) => match self.slot.try_with_value(|slot| slot.render(&config))? {
                Ok(()) => Some(ChartStatus::Ready),
                Err(e) => {
                    log::error!("chart #{}: {}", self.canvas_id, e);
                    Some(ChartStatus::Failed(e.to_string()))
                }
            },
            None => {
                self.slot.try_with_value(|slot| slot.clear())?;
                Some(ChartStatus::Empty(self.empty_text.to_string()))
            }
        }
    }
}

/// Card with a canvas and its loading / empty / failure overlays
#[component]
pub fn ChartCard(
    #[prop(into)] title: String,
    loader: ChartLoader,
    /// Canvas height in px
    #[prop(optional)]
    height: Option<u32>,
    /// Period or limit toggles shown in the header
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let status = loader.status;
    let height = format!("position: relative; height: {}px;", height.unwrap_or(300));
    let canvas_hidden = move || matches!(status.get(), ChartStatus::Empty(_) | ChartStatus::Failed(_));

    view! {
        <div class="card shadow-sm h-100">
            <div class="card-header bg-white d-flex align-items-center justify-content-between">
                <h6 class="mb-0 fw-semibold">{title}</h6>
                {children.map(|c| c())}
            </div>
            <div class="card-body">
                <div style=height>
                    <canvas id=loader.canvas_id() class=("d-none", canvas_hidden)></canvas>
                    {move || match status.get() {
                        ChartStatus::Loading => view! {
                            <div class="position-absolute top-50 start-50 translate-middle">
                                <div class="spinner-border text-primary" role="status"></div>
                            </div>
                        }
                        .into_any(),
                        ChartStatus::Ready => ().into_any(),
                        ChartStatus::Empty(text) => view! {
                            <div class="text-center text-muted p-4">
                                {icon_with("inbox", "fs-1 d-block mb-2")}
                                <p>{text}</p>
                            </div>
                        }
                        .into_any(),
                        ChartStatus::Failed(detail) => view! {
                            <div class="text-center text-danger p-4">
                                {icon_with("exclamation-triangle", "fs-1 d-block mb-2")}
                                <p>{CHART_FAILED_TEXT}</p>
                                <small>{detail}</small>
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

/// Radio-style button group for period / limit toggles
#[component]
pub fn RangeToggle(
    /// `(value, label)` pairs
    options: &'static [(u32, &'static str)],
    #[prop(into)] selected: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="btn-group btn-group-sm" role="group">
            {options
                .iter()
                .map(|&(value, label)| {
                    let class = move || {
                        if selected.get() == value {
                            "btn btn-primary"
                        } else {
                            "btn btn-outline-primary"
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            on:click=move |_| {
                                if selected.get_untracked() != value {
                                    on_change.run(value);
                                }
                            }
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
