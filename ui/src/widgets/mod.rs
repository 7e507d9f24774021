mod customer_detail;
mod customers;

pub use customer_detail::customer_detail;
pub use customers::{CLEAR_LABEL, DELETE_LABEL, LOADING_LABEL, customers_panel, row_action};
