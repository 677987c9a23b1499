pub mod a001_category;
pub mod a002_order;
pub mod a003_product;
pub mod a004_review;
pub mod a005_user;
pub mod a006_voucher;
