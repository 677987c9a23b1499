use crate::shared::api_utils::with_query;

const GROWTH_PATH: &str = "/admin/users/api/user/growth";
pub const ROLES_PATH: &str = "/admin/users/api/user/roles";

pub fn growth_path(days: u32) -> String {
    with_query(GROWTH_PATH, &format!("days={}", days))
}
