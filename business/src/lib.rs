//! Business layer of the backoffice console: everything the customers view
//! does except drawing it.

pub mod config;
pub mod customers;
pub mod format;
pub mod http;
pub mod route;
pub mod session;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use config::BusinessConfig;
pub use route::Route;
pub use session::{MANAGES_CUSTOMERS, Session};
