use crate::dashboards::d404_user_analytics::{api, charts};
use crate::shared::chart::{ChartCard, ChartLoader, RangeToggle};
use crate::shared::config::use_config;
use leptos::prelude::*;

#[component]
pub fn UserAnalyticsDashboard() -> impl IntoView {
    let config = StoredValue::new(use_config());
    let days = RwSignal::new(charts::DEFAULT_DAYS);
    let growth = ChartLoader::new("userGrowthChart", "Chưa có người dùng mới");
    let roles = ChartLoader::new("roleDistributionChart", "Chưa có dữ liệu vai trò");

    let load_growth = move |n: u32| {
        let url = config.with_value(|c| c.url(&api::growth_path(n)));
        growth.load(url, charts::growth_chart);
    };

    Effect::new(move |_| {
        load_growth(days.get_untracked());
        roles.load(config.with_value(|c| c.url(api::ROLES_PATH)), charts::role_chart);
    });

    let on_period = Callback::new(move |n: u32| {
        days.set(n);
        load_growth(n);
    });

    view! {
        <div class="container-fluid py-3">
            <h4 class="mb-3">"Phân tích người dùng"</h4>
            <div class="row g-4">
                <div class="col-lg-8">
                    <ChartCard title="Người dùng mới" loader=growth>
                        <RangeToggle options=charts::PERIOD_OPTIONS selected=days on_change=on_period />
                    </ChartCard>
                </div>
                <div class="col-lg-4">
                    <ChartCard title="Phân bố vai trò" loader=roles />
                </div>
            </div>
        </div>
    }
}
