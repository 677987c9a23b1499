pub mod d401_category_analytics;
pub mod d402_order_charts;
pub mod d403_product_charts;
pub mod d404_user_analytics;

pub use d401_category_analytics::ui::CategoryAnalyticsDashboard;
pub use d402_order_charts::ui::OrderChartsDashboard;
pub use d403_product_charts::ui::ProductChartsDashboard;
pub use d404_user_analytics::ui::UserAnalyticsDashboard;
