//! Pages, one per [`Route`](backoffice_business::Route):
//! - `customers_page`: the customers table
//! - `customer_detail_page`: a single customer, reached by activating a row

mod customer_detail_page;
mod customers_page;

pub use customer_detail_page::{BACK_LABEL, customer_detail_page};
pub use customers_page::customers_page;
