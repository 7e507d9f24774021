//! Latest-only gate for repeated requests of the same kind.
//!
//! Every `begin()` opens a new generation and cancels the one before it.
//! A result is applied only if `accept()` says its id is still the latest,
//! so responses resolving out of order can never overwrite newer data.

use std::marker::PhantomData;

use tokio_util::sync::CancellationToken;

use crate::{TaskHandle, TaskId};

#[derive(Debug)]
pub struct LatestOnly<K: 'static> {
    generation: u64,
    current: Option<TaskHandle>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: 'static> Default for LatestOnly<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: 'static> LatestOnly<K> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            current: None,
            _kind: PhantomData,
        }
    }

    /// Starts a new generation, cancelling the in-flight one if any.
    pub fn begin(&mut self) -> TaskHandle {
        if let Some(previous) = self.current.take() {
            log::trace!(
                "Superseding task generation {}",
                previous.id().generation()
            );
            previous.cancel();
        }

        self.generation += 1;
        let handle = TaskHandle::new(TaskId::of::<K>(self.generation), CancellationToken::new());
        self.current = Some(handle.clone());
        handle
    }

    /// Returns `true` when `id` belongs to the latest generation.
    pub fn is_latest(&self, id: TaskId) -> bool {
        id == TaskId::of::<K>(self.generation) && self.generation > 0
    }

    /// Settles the task with `id`.
    ///
    /// Returns `true` (and clears the in-flight slot) only for the latest generation.
    pub fn accept(&mut self, id: TaskId) -> bool {
        if !self.is_latest(id) {
            log::debug!(
                "Dropping stale result of generation {} (latest is {})",
                id.generation(),
                self.generation
            );
            return false;
        }
        self.current = None;
        true
    }

    /// Whether the latest generation has not settled yet.
    pub fn in_flight(&self) -> bool {
        self.current.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Search;
    struct Other;

    #[test]
    fn begin_increments_generation() {
        let mut gate = LatestOnly::<Search>::new();

        let first = gate.begin();
        let second = gate.begin();

        assert_eq!(first.id().generation(), 1);
        assert_eq!(second.id().generation(), 2);
        assert_eq!(gate.generation(), 2);
    }

    #[test]
    fn begin_cancels_previous() {
        let mut gate = LatestOnly::<Search>::new();

        let first = gate.begin();
        let second = gate.begin();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn stale_result_is_rejected() {
        let mut gate = LatestOnly::<Search>::new();

        let first = gate.begin();
        let second = gate.begin();

        // The older response resolves last but must not win.
        assert!(gate.accept(second.id()));
        assert!(!gate.accept(first.id()));
    }

    #[test]
    fn accept_clears_in_flight() {
        let mut gate = LatestOnly::<Search>::new();
        let handle = gate.begin();

        assert!(gate.in_flight());
        assert!(gate.accept(handle.id()));
        assert!(!gate.in_flight());
    }

    #[test]
    fn foreign_kind_is_rejected() {
        let mut gate = LatestOnly::<Search>::new();
        gate.begin();

        assert!(!gate.accept(TaskId::of::<Other>(1)));
    }

    #[test]
    fn nothing_is_latest_before_first_begin() {
        let gate = LatestOnly::<Search>::new();

        assert!(!gate.is_latest(TaskId::of::<Search>(0)));
    }
}
