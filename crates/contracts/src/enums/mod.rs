pub mod order_status;
pub mod payment_method;
