//! Single-slot broadcast values.
//!
//! A [`StateSlot`] holds the latest value of some piece of state. Any number
//! of [`Observer`]s can read that value at any time and wait for the next
//! one. No history is kept: an observer that falls behind skips straight to
//! the most recent value.

use std::sync::Arc;

use tokio::sync::watch;

/// Writer side of a single-slot broadcast value.
#[derive(Debug)]
pub struct StateSlot<T> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> Clone for StateSlot<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T: Clone> StateSlot<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Replaces the current value and notifies every observer, even when
    /// nobody is subscribed yet.
    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Like [`StateSlot::set`], but hands back the value it replaced.
    pub fn replace(&self, value: T) -> T {
        self.sender.send_replace(value)
    }

    /// Edits the current value in place and notifies every observer.
    pub fn update(&self, modify: impl FnOnce(&mut T)) {
        self.sender.send_modify(modify);
    }

    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> Observer<T> {
        Observer {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Reader side of a [`StateSlot`].
///
/// Starts out holding the slot's current value; [`Observer::next`] yields
/// only values published after that point.
#[derive(Debug, Clone)]
pub struct Observer<T> {
    receiver: watch::Receiver<T>,
}

impl<T: Clone> Observer<T> {
    pub fn current(&self) -> T {
        self.receiver.borrow().clone()
    }

    /// Waits for the next published value.
    ///
    /// Returns `None` once the slot has been dropped and every published
    /// value has been seen.
    pub async fn next(&mut self) -> Option<T> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
