//! Capabilities the controller borrows from its host: confirmation prompts and
//! navigation.

/// Outcome of a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
    /// The answer arrives later as `DeleteConfirmed` / `DeleteDeclined`.
    Pending,
}

pub trait Confirmer: Send {
    fn confirm(&mut self, prompt: &str) -> Confirmation;
}

pub trait Navigator: Send {
    fn navigate(&mut self, path: &str);
}

/// Confirms through a UI modal: every prompt is answered later.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeferredConfirmer;

impl Confirmer for DeferredConfirmer {
    fn confirm(&mut self, prompt: &str) -> Confirmation {
        log::debug!("Deferring confirmation: {prompt}");
        Confirmation::Pending
    }
}

/// Forwards navigation requests over a channel to the app shell.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: flume::Sender<String>,
}

impl ChannelNavigator {
    pub fn new(sender: flume::Sender<String>) -> Self {
        Self { sender }
    }

    /// A navigator plus the receiver the shell drains each frame.
    pub fn channel() -> (Self, flume::Receiver<String>) {
        let (sender, receiver) = flume::unbounded();
        (Self::new(sender), receiver)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&mut self, path: &str) {
        if self.sender.send(path.to_owned()).is_err() {
            log::warn!("Navigation to {path} dropped: no receiver");
        }
    }
}
