//! Async task plumbing shared by the business and UI layers.
//!
//! - `TaskId` / `TaskHandle`: identity and cooperative cancellation of spawned work
//! - `LatestOnly`: generation gate so only the newest request of a kind is applied
//! - `TaskRuntime`: spawns work on Tokio and delivers results to the UI thread

mod error;
mod latest;
mod runtime;
mod task;

pub use error::Error;
pub use latest::LatestOnly;
pub use runtime::{TaskRuntime, Waker};
pub use task::{TaskHandle, TaskId};
