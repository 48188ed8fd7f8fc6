//! Events - Minimal synchronous publish/subscribe
//!
//! A [`Listener`] holds an ordered set of distinct subscribers. Notifying it
//! calls every subscriber in subscription order, passing the sender and an
//! argument bundle. Nothing is queued and nothing runs on another thread.
//!
//! Subscribers are `Rc` handles; subscribing the same handle twice is refused,
//! which is how duplicate subscription is detected.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use shell_canvas::events::{Listener, Subscriber};
//!
//! let mut listener: Listener<&str, u32> = Listener::new();
//! let total = Rc::new(Cell::new(0));
//!
//! let total_clone = total.clone();
//! let handler: Subscriber<&str, u32> = Rc::new(move |_sender: &&str, n: &u32| {
//!     total_clone.set(total_clone.get() + n)
//! });
//!
//! let id = listener.subscribe(handler.clone()).unwrap();
//! assert!(listener.subscribe(handler).is_none()); // already subscribed
//!
//! listener.notify(&"demo", &5);
//! assert_eq!(total.get(), 5);
//!
//! assert!(listener.unsubscribe(id));
//! assert!(!listener.unsubscribe(id));
//! ```

use std::fmt;
use std::rc::Rc;

/// A subscriber callback: `(sender, args)`.
pub type Subscriber<S, A> = Rc<dyn Fn(&S, &A)>;

/// Handle returned by [`Listener::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

/// Ordered set of distinct subscribers.
pub struct Listener<S, A> {
    subscribers: Vec<(SubscriberId, Subscriber<S, A>)>,
    next_id: u64,
}

impl<S, A> Listener<S, A> {
    /// Create an empty listener.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a subscriber at the end of the notification order.
    ///
    /// Returns `None` if this exact handle is already subscribed.
    pub fn subscribe(&mut self, subscriber: Subscriber<S, A>) -> Option<SubscriberId> {
        if self.contains(&subscriber) {
            return None;
        }
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        Some(id)
    }

    /// Convenience wrapper around [`subscribe`](Self::subscribe) for closures.
    ///
    /// A fresh closure is never a duplicate, so this always succeeds.
    pub fn on<F>(&mut self, handler: F) -> SubscriberId
    where
        F: Fn(&S, &A) + 'static,
        S: 'static,
        A: 'static,
    {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Rc::new(handler)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscriber_id, _)| *subscriber_id != id);
        self.subscribers.len() != before
    }

    /// Check whether this exact handle is subscribed.
    pub fn contains(&self, subscriber: &Subscriber<S, A>) -> bool {
        self.subscribers
            .iter()
            .any(|(_, existing)| Rc::ptr_eq(existing, subscriber))
    }

    /// Call every subscriber in subscription order.
    ///
    /// Subscribers must not try to borrow the sender mutably; the notifying
    /// component is still borrowed while its listeners run.
    pub fn notify(&self, sender: &S, args: &A) {
        for (_, subscriber) in &self.subscribers {
            subscriber(sender, args);
        }
    }

    /// Number of subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Check if there are no subscribers.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Remove all subscribers.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}

impl<S, A> Default for Listener<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> fmt::Debug for Listener<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_notify_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listener: Listener<u8, &'static str> = Listener::new();

        for tag in ["first", "second", "third"] {
            let log_clone = log.clone();
            listener.on(move |sender, args| {
                log_clone.borrow_mut().push(format!("{tag}:{sender}:{args}"));
            });
        }

        listener.notify(&7, &"go");
        assert_eq!(*log.borrow(), vec!["first:7:go", "second:7:go", "third:7:go"]);
    }

    #[test]
    fn test_duplicate_subscription_is_refused() {
        let mut listener: Listener<(), ()> = Listener::new();
        let handler: Subscriber<(), ()> = Rc::new(|_: &(), _: &()| {});

        assert!(listener.subscribe(handler.clone()).is_some());
        assert!(listener.subscribe(handler.clone()).is_none());
        assert_eq!(listener.len(), 1);
        assert!(listener.contains(&handler));
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(std::cell::Cell::new(0));
        let mut listener: Listener<(), ()> = Listener::new();

        let count_clone = count.clone();
        let id = listener.on(move |_, _| count_clone.set(count_clone.get() + 1));

        listener.notify(&(), &());
        assert!(listener.unsubscribe(id));
        assert!(!listener.unsubscribe(id));
        listener.notify(&(), &());

        assert_eq!(count.get(), 1);
        assert!(listener.is_empty());
    }

    #[test]
    fn test_resubscribe_after_unsubscribe() {
        let mut listener: Listener<(), ()> = Listener::new();
        let handler: Subscriber<(), ()> = Rc::new(|_: &(), _: &()| {});

        let id = listener.subscribe(handler.clone()).unwrap();
        listener.unsubscribe(id);
        let again = listener.subscribe(handler).unwrap();
        assert_ne!(id, again);
    }

    #[test]
    fn test_clear() {
        let mut listener: Listener<(), ()> = Listener::new();
        listener.on(|_, _| {});
        listener.on(|_, _| {});
        assert_eq!(listener.len(), 2);
        listener.clear();
        assert!(listener.is_empty());
    }
}
