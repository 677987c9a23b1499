use crate::shared::api_utils::with_query;
use contracts::shared::chart::OrderStatusCounts;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

const TRENDS_PATH: &str = "/admin/orders/api/trends";

/// Host element carrying the status counts, e.g.
/// `<div id="admin-order-status" hidden data-pending="3" data-completed="10"></div>`
pub const STATUS_COUNTS_ID: &str = "admin-order-status";

pub fn trends_path(days: u32) -> String {
    with_query(TRENDS_PATH, &format!("days={}", days))
}

/// Status counts rendered into the host page. All zero when the element is absent.
pub fn host_status_counts() -> OrderStatusCounts {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(STATUS_COUNTS_ID))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    match element {
        Some(element) => {
            let dataset = element.dataset();
            OrderStatusCounts::from_dataset(|key| dataset.get(key))
        }
        None => {
            log::warn!("#{} not found, order status chart has no data", STATUS_COUNTS_ID);
            OrderStatusCounts::default()
        }
    }
}
