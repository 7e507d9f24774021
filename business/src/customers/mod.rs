//! Customers table: query state, reducer, API client and the controller
//! that ties them together.

mod action;
mod api;
mod collaborators;
mod columns;
mod controller;
mod customer;
mod notice;
mod pagination;
mod query;

pub use action::{CustomersAction, Effect, ReduceError, Reduction, reduce};
pub use api::{ApiError, ApiResult, CustomersApi, HttpCustomersApi};
pub use collaborators::{ChannelNavigator, Confirmation, Confirmer, DeferredConfirmer, Navigator};
pub use columns::{CUSTOMER_COLUMNS, ColumnConfig, ColumnKey, Formatter};
pub use controller::{ControllerMessage, CustomersController, NOT_AUTHORIZED, SearchCustomers};
pub use customer::{CustomerId, CustomerRow, ResultSnapshot};
pub use notice::{Notice, NoticeKind};
pub use pagination::{PageInfo, current_page, skip_for_page, total_pages};
pub use query::{QueryPayload, QueryState, RecordType, Tab, build_query};
