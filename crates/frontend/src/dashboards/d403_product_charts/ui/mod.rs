pub mod dashboard;

pub use dashboard::ProductChartsDashboard;
