use crate::dashboards::d403_product_charts::{api, charts};
use crate::shared::chart::{ChartCard, ChartLoader};
use crate::shared::config::use_config;
use leptos::prelude::*;

#[component]
pub fn ProductChartsDashboard() -> impl IntoView {
    let config = use_config();
    let url = config.url(api::CATEGORY_DISTRIBUTION_PATH);
    let distribution = ChartLoader::new("categoryPieChart", charts::EMPTY_TEXT);

    Effect::new(move |_| distribution.load(url.clone(), charts::category_distribution_chart));

    view! {
        <div class="container-fluid py-3">
            <h4 class="mb-3">"Thống kê sản phẩm"</h4>
            <div class="row">
                <div class="col-lg-6">
                    <ChartCard title="Phân bố sản phẩm theo danh mục" loader=distribution height=320 />
                </div>
            </div>
        </div>
    }
}
