pub const CATEGORY_DISTRIBUTION_PATH: &str = "/admin/products/api/stats/category-distribution";
