//! Explicit observer registration for change notification.
//!
//! # Responsibility
//! - Provide a minimal single-threaded callback registry used by the
//!   aggregate ("changed"/"mutated" notifications) and the filter channel.
//!
//! # Invariants
//! - Subscribers are invoked in registration order.
//! - Unsubscribing never disturbs the ids of other subscriptions.

/// Handle returned by [`Notifier::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered registry of `FnMut` subscribers for one event type.
///
/// Single-threaded by design: the whole system runs on one logical thread of
/// control, so subscribers are plain boxed closures, not channels or locks.
pub struct Notifier<E> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&E)>)>,
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Registers a subscriber and returns its handle.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns whether the handle was still live.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Delivers one event to every live subscriber, in registration order.
    pub fn emit(&mut self, event: &E) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}
