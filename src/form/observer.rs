//! Listener registry used for the engine's outputs.

use std::fmt;

/// Handle returned when registering a listener; pass it back to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

impl Subscription {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }
}

type Listener<T> = Box<dyn FnMut(&T)>;

/// Ordered set of listeners notified synchronously
pub struct Observers<T> {
    listeners: Vec<(Subscription, Listener<T>)>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.listeners.len())
            .finish()
    }
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn add(&mut self, subscription: Subscription, listener: Listener<T>) {
        self.listeners.push((subscription, listener));
    }

    /// Remove a listener, returning whether it was registered here
    pub fn remove(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(s, _)| *s != subscription);
        self.listeners.len() != before
    }

    /// Call every listener, in registration order
    pub fn notify(&mut self, value: &T) {
        for (_, listener) in &mut self.listeners {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
