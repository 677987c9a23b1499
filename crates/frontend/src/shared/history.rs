//! Address-bar query string access without navigation.

use crate::shared::api_utils::with_query;
use wasm_bindgen::JsValue;
use web_sys::window;

/// `location.search` without the leading `?`.
pub fn current_query() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
        .trim_start_matches('?')
        .to_string()
}

/// Replaces the current history entry so the URL mirrors `query`.
pub fn replace_query(query: &str) {
    let Some(w) = window() else { return };
    let location = w.location();
    let path = location.pathname().unwrap_or_default();
    let new_url = with_query(&path, query);

    let current = with_query(&path, current_query().as_str());
    if current == new_url {
        return;
    }

    if let Ok(history) = w.history() {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url)) {
            log::warn!("history.replaceState failed: {:?}", e);
        }
    }
}
