//! API utilities for frontend-backend communication
//!
//! The admin API is served by the same origin as the dashboard unless the
//! host page overrides the base through [`AdminConfig`](crate::shared::config::AdminConfig).

/// Join an API base and a path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("", "/admin/orders/api/trends"), "/admin/orders/api/trends");
/// assert_eq!(api_url("https://shop.example/", "/api/admin/users/search"),
///            "https://shop.example/api/admin/users/search");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Append an already-encoded query string to a URL
pub fn with_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, query)
    }
}

/// Percent-encode one query value
pub fn encode_q(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
