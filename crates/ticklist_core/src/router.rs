//! Filter routing over a single catch-all route.
//!
//! # Responsibility
//! - Map route fragments to filter-changed events on an explicit channel.
//!
//! # Invariants
//! - Every navigation publishes exactly one filter-changed event.
//! - Routing never mutates domain data.

use crate::observe::{Notifier, SubscriptionId};
use crate::projection::filter::Filter;
use std::cell::RefCell;
use std::rc::Rc;

/// Single-purpose channel carrying filter-changed events.
///
/// Owned by the application controller and handed to the router and to the
/// view-facing projections; there is no ambient global bus.
pub struct FilterChannel {
    notifier: Notifier<Filter>,
}

impl FilterChannel {
    pub fn new() -> Self {
        Self {
            notifier: Notifier::new(),
        }
    }

    /// Registers a filter-changed subscriber.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Filter) + 'static) -> SubscriptionId {
        self.notifier.subscribe(subscriber)
    }

    /// Removes a subscriber registered with [`FilterChannel::subscribe`].
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Publishes one filter-changed event to every subscriber.
    pub fn publish(&mut self, filter: Filter) {
        self.notifier.emit(&filter);
    }
}

impl Default for FilterChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to the controller-owned channel.
pub type SharedFilterChannel = Rc<RefCell<FilterChannel>>;

/// Three-state machine driven by route fragment changes.
///
/// The route surface is one catch-all pattern: the entire remaining path is
/// the filter name.
pub struct FilterRouter {
    channel: SharedFilterChannel,
    current: Filter,
}

impl FilterRouter {
    /// Creates a router publishing on the controller's channel.
    pub fn new(channel: SharedFilterChannel) -> Self {
        Self {
            channel,
            current: Filter::All,
        }
    }

    /// Handles one fragment change.
    ///
    /// Trims and matches the fragment (empty or unrecognized input maps to
    /// `All`), updates the router state, and publishes exactly one
    /// filter-changed event.
    pub fn navigate(&mut self, fragment: &str) -> Filter {
        let next = Filter::parse(fragment);
        self.current = next;
        self.channel.borrow_mut().publish(next);
        next
    }

    /// The filter selected by the last navigation.
    pub fn current(&self) -> Filter {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterChannel, FilterRouter};
    use crate::projection::filter::Filter;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn each_navigation_publishes_exactly_one_event() {
        let channel = Rc::new(RefCell::new(FilterChannel::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = Rc::clone(&seen);
        channel
            .borrow_mut()
            .subscribe(move |filter: &Filter| seen_clone.borrow_mut().push(*filter));

        let mut router = FilterRouter::new(Rc::clone(&channel));
        router.navigate("active");
        router.navigate("active");
        router.navigate("nonsense");

        assert_eq!(
            *seen.borrow(),
            vec![Filter::Active, Filter::Active, Filter::All]
        );
        assert_eq!(router.current(), Filter::All);
    }
}
