use crate::dashboards::d401_category_analytics::{api, charts};
use crate::shared::chart::{ChartCard, ChartLoader, RangeToggle};
use crate::shared::config::use_config;
use leptos::prelude::*;

#[component]
pub fn CategoryAnalyticsDashboard() -> impl IntoView {
    let config = StoredValue::new(use_config());
    let limit = RwSignal::new(charts::DEFAULT_LIMIT);
    let performance = ChartLoader::new("categoryPerformanceChart", "Chưa có dữ liệu danh mục");

    let load = move |n: u32| {
        log::debug!("category performance: limit {}", n);
        let url = config.with_value(|c| c.url(&api::performance_path(n)));
        performance.load(url, charts::performance_chart);
    };

    Effect::new(move |_| load(limit.get_untracked()));

    let on_limit = Callback::new(move |n: u32| {
        limit.set(n);
        load(n);
    });

    view! {
        <div class="container-fluid py-3">
            <h4 class="mb-3">"Phân tích danh mục"</h4>
            <ChartCard title="Hiệu suất danh mục" loader=performance height=400>
                <RangeToggle options=charts::LIMIT_OPTIONS selected=limit on_change=on_limit />
            </ChartCard>
        </div>
    }
}
