pub mod api_utils;
pub mod chart;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod debounce;
pub mod history;
pub mod http;
pub mod icons;
pub mod list_page;
pub mod list_utils;
