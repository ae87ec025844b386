//! Change notification for board observers.
//!
//! Each subscriber owns the receiving end of an mpsc channel. The board keeps
//! the senders, sends one `BoardChanged` after every mutation and drops
//! senders whose receiver has gone away.

use std::sync::mpsc::{channel, Receiver, Sender};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Sent to every subscriber after a board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardChanged {
    /// Board revision after the change.
    pub revision: u64,
}

#[derive(Debug, Default)]
pub struct ObserverRegistry {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sender<BoardChanged>)>,
}

impl ObserverRegistry {
    pub fn subscribe(&mut self) -> (SubscriptionId, Receiver<BoardChanged>) {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let (tx, rx) = channel();
        self.subscribers.push((id, tx));
        (id, rx)
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn notify(&mut self, event: BoardChanged) {
        self.subscribers.retain(|(_, tx)| tx.send(event).is_ok());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
