use crate::dashboards::{
    CategoryAnalyticsDashboard, OrderChartsDashboard, ProductChartsDashboard,
    UserAnalyticsDashboard,
};
use crate::domain::a001_category::ui::list::CategoryListPage;
use crate::domain::a002_order::ui::list::OrderListPage;
use crate::domain::a003_product::ui::list::ProductListPage;
use crate::domain::a004_review::ui::list::ReviewListPage;
use crate::domain::a005_user::ui::list::UserListPage;
use crate::domain::a006_voucher::ui::create::VoucherCreatePage;
use crate::domain::a006_voucher::ui::list::VoucherListPage;
use crate::layout::Shell;
use crate::shared::icons::icon_with;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center text-muted py-5">
            {icon_with("signpost-split", "display-4 d-block mb-3")}
            <p class="mb-0">"Không tìm thấy trang"</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/admin") view=OrderChartsDashboard />
                    <Route path=path!("/admin/categories") view=CategoryListPage />
                    <Route path=path!("/admin/categories/analytics") view=CategoryAnalyticsDashboard />
                    <Route path=path!("/admin/orders") view=OrderListPage />
                    <Route path=path!("/admin/orders/statistics") view=OrderChartsDashboard />
                    <Route path=path!("/admin/products") view=ProductListPage />
                    <Route path=path!("/admin/products/statistics") view=ProductChartsDashboard />
                    <Route path=path!("/admin/reviews") view=ReviewListPage />
                    <Route path=path!("/admin/users") view=UserListPage />
                    <Route path=path!("/admin/users/analytics") view=UserAnalyticsDashboard />
                    <Route path=path!("/admin/vouchers") view=VoucherListPage />
                    <Route path=path!("/admin/vouchers/create") view=VoucherCreatePage />
                </Routes>
            </Shell>
        </Router>
    }
}
