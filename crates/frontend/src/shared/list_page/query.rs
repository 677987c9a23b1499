use crate::shared::api_utils::encode_q;
use std::collections::HashMap;

/// Filter values (in filter-bar order) plus the 1-based page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    filters: Vec<(&'static str, String)>,
    page: u32,
}

impl ListQuery {
    pub fn new(keys: &[&'static str]) -> Self {
        Self {
            filters: keys.iter().map(|k| (*k, String::new())).collect(),
            page: 1,
        }
    }

    /// Restores filters and page from an address-bar query string.
    /// Unknown keys are ignored; a missing or invalid page reads as 1.
    pub fn from_query_string(keys: &[&'static str], query: &str) -> Self {
        let params = flat_params(query);
        let mut restored = Self::new(keys);
        for (key, value) in restored.filters.iter_mut() {
            if let Some(v) = params.get(*key) {
                *value = v.clone();
            }
        }
        restored.page = params
            .get("page")
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1);
        restored
    }

    /// Any filter change starts over from the first page.
    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) {
        if let Some((_, v)) = self.filters.iter_mut().find(|(k, _)| *k == key) {
            *v = value.into();
        }
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn value(&self, key: &str) -> &str {
        self.filters
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.iter().filter(|(_, v)| !v.trim().is_empty()).count()
    }

    /// `keyword=..&status=..&page=N`, skipping empty filters
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = self
            .filters
            .iter()
            .filter_map(|(key, value)| {
                let value = value.trim();
                (!value.is_empty()).then(|| format!("{}={}", key, encode_q(value)))
            })
            .collect();
        parts.push(format!("page={}", self.page));
        parts.join("&")
    }
}

/// Decodes each `key=value` pair on its own so that a nested or repeated
/// parameter from elsewhere only loses itself. The first value of a key wins.
fn flat_params(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
        match serde_qs::from_str::<HashMap<String, String>>(pair) {
            Ok(decoded) => {
                for (key, value) in decoded {
                    params.entry(key).or_insert(value);
                }
            }
            Err(e) => log::debug!("ignoring query parameter {:?}: {}", pair, e),
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &["keyword", "status", "paymentMethod", "period"];

    #[test]
    fn test_filter_change_resets_page() {
        let mut query = ListQuery::new(KEYS);
        query.set_page(4);
        assert_eq!(query.page(), 4);
        query.set_filter("status", "PENDING");
        assert_eq!(query.page(), 1);

        query.set_page(3);
        query.set_filter("keyword", "");
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_query_string_skips_empty_filters() {
        let mut query = ListQuery::new(KEYS);
        assert_eq!(query.to_query_string(), "page=1");

        query.set_filter("keyword", "  áo thun ");
        query.set_filter("period", "week");
        query.set_page(2);
        assert_eq!(
            query.to_query_string(),
            "keyword=%C3%A1o%20thun&period=week&page=2"
        );
        assert_eq!(query.active_filter_count(), 2);
    }

    #[test]
    fn test_restore_from_address_bar() {
        let query = ListQuery::from_query_string(
            KEYS,
            "keyword=%C3%A1o&status=SHIPPED&page=3&sortBy=id",
        );
        assert_eq!(query.value("keyword"), "áo");
        assert_eq!(query.value("status"), "SHIPPED");
        assert_eq!(query.value("sortBy"), "");
        assert_eq!(query.page(), 3);
    }

    #[test]
    fn test_restore_survives_foreign_parameters() {
        let query =
            ListQuery::from_query_string(KEYS, "status=active&utm[src]=mail&page=3");
        assert_eq!(query.value("status"), "active");
        assert_eq!(query.page(), 3);

        let query = ListQuery::from_query_string(KEYS, "status=active&tag=a&tag=b&page=3");
        assert_eq!(query.value("status"), "active");
        assert_eq!(query.page(), 3);

        let query = ListQuery::from_query_string(KEYS, "?keyword=v%C3%A1y+d%C3%A0i&&status=A&status=B");
        assert_eq!(query.value("keyword"), "váy dài");
        assert_eq!(query.value("status"), "A");
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_restore_invalid_page() {
        assert_eq!(ListQuery::from_query_string(KEYS, "page=abc").page(), 1);
        assert_eq!(ListQuery::from_query_string(KEYS, "page=0").page(), 1);
        assert_eq!(ListQuery::from_query_string(KEYS, "").page(), 1);
    }

    #[test]
    fn test_unknown_key_is_not_settable() {
        let mut query = ListQuery::new(KEYS);
        query.set_filter("roleId", "2");
        assert_eq!(query.value("roleId"), "");
        assert_eq!(query.to_query_string(), "page=1");
    }
}
