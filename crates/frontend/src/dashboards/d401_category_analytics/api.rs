use crate::shared::api_utils::with_query;

const PERFORMANCE_PATH: &str = "/admin/categories/api/stats/performance";

/// Product count per category, top `limit` categories
pub fn performance_path(limit: u32) -> String {
    with_query(PERFORMANCE_PATH, &format!("limit={}", limit))
}
