use crate::dashboards::d402_order_charts::{api, charts};
use crate::shared::chart::{ChartCard, ChartLoader, RangeToggle};
use crate::shared::config::use_config;
use leptos::prelude::*;

#[component]
pub fn OrderChartsDashboard() -> impl IntoView {
    let config = StoredValue::new(use_config());
    let days = RwSignal::new(charts::DEFAULT_DAYS);
    let status = ChartLoader::new("orderStatusChart", "Chưa có đơn hàng");
    let trends = ChartLoader::new("orderTrendsChart", "Chưa có dữ liệu đơn hàng");

    let load_trends = move |n: u32| {
        let url = config.with_value(|c| c.url(&api::trends_path(n)));
        trends.load(url, charts::trends_chart);
    };

    Effect::new(move |_| {
        status.show(charts::status_chart(api::host_status_counts()));
        load_trends(days.get_untracked());
    });

    let on_period = Callback::new(move |n: u32| {
        days.set(n);
        load_trends(n);
    });

    view! {
        <div class="container-fluid py-3">
            <h4 class="mb-3">"Thống kê đơn hàng"</h4>
            <div class="row g-4">
                <div class="col-lg-5">
                    <ChartCard title="Trạng thái đơn hàng" loader=status />
                </div>
                <div class="col-lg-7">
                    <ChartCard title="Xu hướng đơn hàng" loader=trends>
                        <RangeToggle options=charts::PERIOD_OPTIONS selected=days on_change=on_period />
                    </ChartCard>
                </div>
            </div>
        </div>
    }
}
