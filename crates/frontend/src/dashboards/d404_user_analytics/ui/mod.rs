pub mod dashboard;

pub use dashboard::UserAnalyticsDashboard;
