pub mod dashboard;

pub use dashboard::CategoryAnalyticsDashboard;
