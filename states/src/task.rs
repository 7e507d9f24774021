//! Task identity and cancellation handles.
//!
//! - `TaskId`: names a spawned task by the kind of work it does plus a generation counter
//! - `TaskHandle`: pairs a `TaskId` with the `CancellationToken` the task listens on
//!
//! ```ignore
//! use backoffice_states::{TaskHandle, TaskId};
//! use tokio_util::sync::CancellationToken;
//!
//! let handle = TaskHandle::new(TaskId::of::<SearchCustomers>(1), CancellationToken::new());
//! handle.cancel();
//! assert!(handle.is_cancelled());
//! ```

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Unique identifier for a spawned task.
///
/// Two ids of the same kind compare by generation, which is how stale results
/// are told apart from the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    kind: TypeId,
    generation: u64,
}

impl TaskId {
    /// Creates a `TaskId` for work of kind `K` at the given generation.
    pub fn of<K: 'static>(generation: u64) -> Self {
        Self {
            kind: TypeId::of::<K>(),
            generation,
        }
    }

    /// Higher generations were issued later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a spawned task with cooperative cancellation.
///
/// Cancelling does not abort the task; the task observes the token through
/// `tokio::select!` and gives up at its next await point.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Clone of the token, for handing to the async work.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Search;
    struct Delete;

    #[test]
    fn task_id_generation() {
        let id = TaskId::of::<Search>(42);

        assert_eq!(id.generation(), 42);
    }

    #[test]
    fn task_id_equality() {
        let id1 = TaskId::of::<Search>(1);
        let id2 = TaskId::of::<Search>(1);
        let id3 = TaskId::of::<Search>(2);
        let id4 = TaskId::of::<Delete>(1);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_ne!(id1, id4);
    }

    #[test]
    fn task_handle_cancel() {
        let handle = TaskHandle::new(TaskId::of::<Search>(1), CancellationToken::new());

        assert!(!handle.is_cancelled());
        handle.cancel();
        assert!(handle.is_cancelled());
    }

    #[test]
    fn task_handle_clones_share_token() {
        let handle1 = TaskHandle::new(TaskId::of::<Search>(1), CancellationToken::new());
        let handle2 = handle1.clone();
        let token = handle1.cancellation_token();

        handle2.cancel();

        assert!(handle1.is_cancelled());
        assert!(token.is_cancelled());
    }
}
