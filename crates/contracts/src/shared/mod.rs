pub mod chart;
pub mod nullable;
pub mod page;
