//! Runtime configuration read from the host page.
//!
//! The host HTML can carry
//! `<meta name="admin-api-base" content="https://shop.example">` and
//! `<meta name="admin-debounce-ms" content="400">`; both are optional.
//!
//! Filter selects whose choices live in the database (categories, parent
//! categories, roles) are seeded by the host page as JSON:
//!
//! ```html
//! <script type="application/json" id="admin-filter-options">
//!   {"categoryId": [{"value": "3", "label": "Áo sơ mi"}]}
//! </script>
//! ```

use crate::shared::api_utils::api_url;
use leptos::prelude::*;
use serde::Deserialize;
use std::collections::BTreeMap;
use web_sys::window;

const META_API_BASE: &str = "admin-api-base";
const META_DEBOUNCE_MS: &str = "admin-debounce-ms";
const FILTER_OPTIONS_ID: &str = "admin-filter-options";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminConfig {
    /// Empty means same origin
    pub api_base: String,
    /// Overrides every page's own keyword debounce when set
    pub debounce_ms: Option<u32>,
    /// Host-provided select choices keyed by query parameter
    pub filter_options: BTreeMap<String, Vec<FilterOption>>,
}

impl AdminConfig {
    pub fn from_document() -> Self {
        let mut config = Self::from_meta(read_meta(META_API_BASE), read_meta(META_DEBOUNCE_MS));
        if let Some(json) = read_script(FILTER_OPTIONS_ID) {
            config = config.with_filter_options_json(&json);
        }
        config
    }

    pub fn from_meta(api_base: Option<String>, debounce_ms: Option<String>) -> Self {
        Self {
            api_base: api_base.map(|s| s.trim().to_string()).unwrap_or_default(),
            debounce_ms: debounce_ms
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|ms| *ms > 0),
            filter_options: BTreeMap::new(),
        }
    }

    /// Malformed JSON is logged and leaves the selects with only their "all" entry.
    pub fn with_filter_options_json(mut self, json: &str) -> Self {
        match serde_json::from_str::<BTreeMap<String, Vec<FilterOption>>>(json) {
            Ok(options) => self.filter_options = options,
            Err(e) => log::warn!("ignoring #{}: {}", FILTER_OPTIONS_ID, e),
        }
        self
    }

    pub fn options_for(&self, key: &str) -> &[FilterOption] {
        self.filter_options.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn url(&self, path: &str) -> String {
        api_url(&self.api_base, path)
    }

    pub fn debounce_or(&self, page_default: u32) -> u32 {
        self.debounce_ms.unwrap_or(page_default)
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = window()?.document()?;
    let selector = format!("meta[name='{}']", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

fn read_script(id: &str) -> Option<String> {
    window()?.document()?.get_element_by_id(id)?.text_content()
}

/// Config provided by `App`; falls back to defaults outside the app tree.
pub fn use_config() -> AdminConfig {
    use_context::<AdminConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_same_origin() {
        let cfg = AdminConfig::from_meta(None, None);
        assert_eq!(cfg.url("/admin/orders/api/search"), "/admin/orders/api/search");
        assert_eq!(cfg.debounce_or(500), 500);
    }

    #[test]
    fn meta_values_are_trimmed_and_validated() {
        let cfg = AdminConfig::from_meta(
            Some(" https://shop.example/ ".into()),
            Some("abc".into()),
        );
        assert_eq!(cfg.url("/x"), "https://shop.example/x");
        assert_eq!(cfg.debounce_ms, None);

        let cfg = AdminConfig::from_meta(None, Some("250".into()));
        assert_eq!(cfg.debounce_or(500), 250);

        let cfg = AdminConfig::from_meta(None, Some("0".into()));
        assert_eq!(cfg.debounce_or(300), 300);
    }

    #[test]
    fn filter_options_from_host_json() {
        let cfg = AdminConfig::default().with_filter_options_json(
            r#"{"roleId": [{"value": "1", "label": "Quản trị viên"}, {"value": "3", "label": "Khách hàng"}]}"#,
        );
        let roles = cfg.options_for("roleId");
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[1].value, "3");
        assert!(cfg.options_for("categoryId").is_empty());

        let cfg = AdminConfig::default().with_filter_options_json("not json");
        assert!(cfg.filter_options.is_empty());
    }
}
