//! Task runtime that runs async work on Tokio and hands the results back to
//! the UI thread through a `flume` channel.
//!
//! The UI thread owns the receiving side and drains it once per frame; async
//! tasks never touch view state directly.

use std::future::Future;
use std::sync::Arc;

use flume::{Receiver, Sender};
use tokio::runtime::Handle;

use crate::{Error, TaskHandle};

/// Callback used to wake the UI when a message arrives (e.g. `egui::Context::request_repaint`).
pub type Waker = Arc<dyn Fn() + Send + Sync>;

pub struct TaskRuntime<M> {
    handle: Handle,
    send: Sender<M>,
    recv: Receiver<M>,
    waker: Option<Waker>,
    outstanding: usize,
}

impl<M> std::fmt::Debug for TaskRuntime<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRuntime")
            .field("outstanding", &self.outstanding)
            .field("queued", &self.recv.len())
            .field("waker", &self.waker.is_some())
            .finish()
    }
}

impl<M: Send + 'static> TaskRuntime<M> {
    pub fn new(handle: Handle) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            handle,
            send,
            recv,
            waker: None,
            outstanding: 0,
        }
    }

    /// Uses the Tokio runtime the caller is running inside of.
    pub fn current() -> Result<Self, Error> {
        let handle = Handle::try_current().map_err(|e| Error::NoRuntime(e.to_string()))?;
        Ok(Self::new(handle))
    }

    pub fn set_waker(&mut self, waker: Waker) {
        self.waker = Some(waker);
    }

    /// Runs `work` to completion and posts its output.
    pub fn spawn<F>(&mut self, work: F)
    where
        F: Future<Output = M> + Send + 'static,
    {
        let send = self.send.clone();
        let waker = self.waker.clone();
        self.outstanding += 1;
        self.handle.spawn(async move {
            let message = work.await;
            post(&send, waker.as_ref(), message);
        });
    }

    /// Runs `work` until it finishes or `task` is cancelled.
    ///
    /// `finish` always runs and receives `None` on cancellation, so every spawn
    /// posts exactly one message.
    pub fn spawn_cancellable<F, T, C>(&mut self, task: &TaskHandle, work: F, finish: C)
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
        C: FnOnce(Option<T>) -> M + Send + 'static,
    {
        let token = task.cancellation_token();
        self.spawn(async move {
            let output = tokio::select! {
                biased;
                () = token.cancelled() => None,
                output = work => Some(output),
            };
            finish(output)
        });
    }

    /// Takes every message that is ready without blocking.
    pub fn drain(&mut self) -> Vec<M> {
        let messages: Vec<M> = self.recv.try_iter().collect();
        self.outstanding = self.outstanding.saturating_sub(messages.len());
        messages
    }

    /// Waits for the next message; `None` when nothing is outstanding.
    pub async fn next(&mut self) -> Option<M> {
        if self.outstanding == 0 && self.recv.is_empty() {
            return None;
        }
        let message = self.recv.recv_async().await.ok()?;
        self.outstanding = self.outstanding.saturating_sub(1);
        Some(message)
    }

    /// Number of spawned tasks whose message has not been taken yet.
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }
}

fn post<M>(send: &Sender<M>, waker: Option<&Waker>, message: M) {
    // The receiver lives as long as the owning view; a closed channel means
    // the view is gone and the result has nowhere to go.
    if send.send(message).is_err() {
        log::debug!("Task finished after its runtime was dropped");
        return;
    }
    if let Some(wake) = waker {
        wake();
    }
}
