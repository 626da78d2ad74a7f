//! Subscription registry.
//!
//! Subscriptions are grouped per subscriber. Subscribers are kept in the
//! order of their first subscription; within a subscriber, subscriptions keep
//! the order they were added in. Dispatch relies on both orders.

use eventide_core::{BoxError, Category, Event, EventKind, Handler, SubscriberId};
use std::fmt;

/// A single (kind, category, handler) registration.
pub struct Subscription {
    kind: EventKind,
    category: Category,
    handler: Box<dyn Handler>,
}

impl Subscription {
    /// Create a subscription; the category mask is derived from `kind`.
    pub fn new<H: Handler>(kind: EventKind, handler: H) -> Self {
        Self {
            kind,
            category: kind.categories(),
            handler: Box::new(handler),
        }
    }

    /// The kind this subscription listens for.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The category mask of this subscription.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns `true` if `event` should be delivered to this subscription.
    pub fn matches(&self, event: &Event) -> bool {
        self.kind == event.kind() && event.is_in_category(self.category)
    }

    /// Run the handler.
    pub fn handle(&mut self, event: &mut Event) -> Result<bool, BoxError> {
        self.handler.handle(event)
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("kind", &self.kind)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Criterion selecting subscriptions to remove.
///
/// Usually built implicitly from an [`EventKind`] or a [`Category`]:
///
/// ```rust,ignore
/// registry.unsubscribe(id, EventKind::KeyPressed);
/// registry.unsubscribe(id, Category::INPUT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interest {
    /// Subscriptions for exactly this kind.
    Kind(EventKind),
    /// Subscriptions whose category mask intersects this one.
    Category(Category),
}

impl Interest {
    /// Returns `true` if this criterion selects `subscription`.
    pub fn covers(&self, subscription: &Subscription) -> bool {
        match *self {
            Interest::Kind(kind) => subscription.kind == kind,
            Interest::Category(category) => subscription.category.intersects(category),
        }
    }
}

impl From<EventKind> for Interest {
    fn from(kind: EventKind) -> Self {
        Interest::Kind(kind)
    }
}

impl From<Category> for Interest {
    fn from(category: Category) -> Self {
        Interest::Category(category)
    }
}

/// All subscriptions of one subscriber.
#[derive(Debug)]
pub struct SubscriberEntry {
    id: SubscriberId,
    subscriptions: Vec<Subscription>,
}

impl SubscriberEntry {
    /// The subscriber.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Subscriptions in registration order.
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// The first subscription matching `event`, if any.
    ///
    /// Later duplicates for the same kind are never reached.
    pub fn first_match_mut(&mut self, event: &Event) -> Option<&mut Subscription> {
        self.subscriptions.iter_mut().find(|s| s.matches(event))
    }
}

/// Per-subscriber registry of subscriptions.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = SubscriptionRegistry::new();
/// registry.subscribe(SubscriberId(1), EventKind::WindowClose, |_: &mut Event| true);
/// assert_eq!(registry.len(), 1);
///
/// registry.unsubscribe(SubscriberId(1), Category::WINDOW);
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    entries: Vec<SubscriberEntry>,
    prune_empty: bool,
}

impl SubscriptionRegistry {
    /// Create an empty registry that keeps empty subscriber entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a subscriber entry is dropped once it has no subscriptions.
    pub fn with_pruning(mut self, prune_empty: bool) -> Self {
        self.prune_empty = prune_empty;
        self
    }

    /// Append a subscription for `subscriber`.
    ///
    /// Duplicates are stored; only the first one ever matches.
    pub fn subscribe<H: Handler>(&mut self, subscriber: SubscriberId, kind: EventKind, handler: H) {
        let subscription = Subscription::new(kind, handler);
        match self.position(subscriber) {
            Some(index) => self.entries[index].subscriptions.push(subscription),
            None => self.entries.push(SubscriberEntry {
                id: subscriber,
                subscriptions: vec![subscription],
            }),
        }
    }

    /// Remove every subscription of `subscriber` selected by `interest`.
    ///
    /// Returns how many were removed; unknown subscribers remove nothing.
    pub fn unsubscribe(&mut self, subscriber: SubscriberId, interest: impl Into<Interest>) -> usize {
        let interest = interest.into();
        let Some(index) = self.position(subscriber) else {
            return 0;
        };

        let entry = &mut self.entries[index];
        let before = entry.subscriptions.len();
        entry.subscriptions.retain(|s| !interest.covers(s));
        let removed = before - entry.subscriptions.len();

        if self.prune_empty && entry.subscriptions.is_empty() {
            self.entries.remove(index);
        }
        removed
    }

    /// Remove `subscriber` and all of its subscriptions.
    pub fn unsubscribe_all(&mut self, subscriber: SubscriberId) -> usize {
        match self.position(subscriber) {
            Some(index) => self.entries.remove(index).subscriptions.len(),
            None => 0,
        }
    }

    /// Whether `subscriber` has an entry.
    pub fn contains(&self, subscriber: SubscriberId) -> bool {
        self.position(subscriber).is_some()
    }

    /// Subscriptions of `subscriber`, empty if unknown.
    pub fn subscriptions_of(&self, subscriber: SubscriberId) -> &[Subscription] {
        match self.position(subscriber) {
            Some(index) => &self.entries[index].subscriptions,
            None => &[],
        }
    }

    /// Subscriber ids in delivery order.
    pub fn subscribers(&self) -> impl Iterator<Item = SubscriberId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Subscriber entries in delivery order.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut SubscriberEntry> {
        self.entries.iter_mut()
    }

    /// Number of subscriber entries.
    pub fn subscriber_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of subscriptions.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|e| e.subscriptions.len()).sum()
    }

    /// Whether there are no subscriptions at all.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.subscriptions.is_empty())
    }

    /// Drop every subscription and release the storage.
    pub fn clear(&mut self) {
        self.entries = Vec::new();
    }

    fn position(&self, subscriber: SubscriberId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == subscriber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventide_core::catalog::{KeyPressed, WindowResized};
    use eventide_core::KeyCode;

    fn noop(_: &mut Event) -> bool {
        false
    }

    const S1: SubscriberId = SubscriberId(1);
    const S2: SubscriberId = SubscriberId(2);

    #[test]
    fn test_subscribe_groups_by_subscriber() {
        let mut registry = SubscriptionRegistry::new();
        registry.subscribe(S1, EventKind::KeyPressed, noop);
        registry.subscribe(S2, EventKind::WindowClose, noop);
        registry.subscribe(S1, EventKind::MouseMoved, noop);

        assert_eq!(registry.subscriber_count(), 2);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.subscribers().collect::<Vec<_>>(), vec![S1, S2]);

        let kinds: Vec<_> = registry
            .subscriptions_of(S1)
            .iter()
            .map(Subscription::kind)
            .collect();
        assert_eq!(kinds, vec![EventKind::KeyPressed, EventKind::MouseMoved]);
    }

    #[test]
    fn test_category_derived_from_kind() {
        let subscription = Subscription::new(EventKind::MouseButtonPressed, noop);
        assert_eq!(
            subscription.category(),
            Category::INPUT | Category::MOUSE | Category::MOUSE_BUTTON
        );
    }

    #[test]
    fn test_unsubscribe_by_kind() {
        let mut registry = SubscriptionRegistry::new();
        registry.subscribe(S1, EventKind::KeyPressed, noop);
        registry.subscribe(S1, EventKind::KeyPressed, noop);
        registry.subscribe(S1, EventKind::KeyReleased, noop);
        registry.subscribe(S2, EventKind::KeyPressed, noop);

        assert_eq!(registry.unsubscribe(S1, EventKind::KeyPressed), 2);
        assert_eq!(registry.subscriptions_of(S1).len(), 1);
        assert_eq!(registry.subscriptions_of(S2).len(), 1);
    }

    #[test]
    fn test_unsubscribe_by_category() {
        let mut registry = SubscriptionRegistry::new();
        registry.subscribe(S1, EventKind::KeyPressed, noop);
        registry.subscribe(S1, EventKind::MouseScrolled, noop);
        registry.subscribe(S1, EventKind::WindowResize, noop);

        assert_eq!(registry.unsubscribe(S1, Category::INPUT), 2);
        let remaining: Vec<_> = registry
            .subscriptions_of(S1)
            .iter()
            .map(Subscription::kind)
            .collect();
        assert_eq!(remaining, vec![EventKind::WindowResize]);
    }

    #[test]
    fn test_unsubscribe_unknown_is_noop() {
        let mut registry = SubscriptionRegistry::new();
        registry.subscribe(S1, EventKind::AppTick, noop);

        assert_eq!(registry.unsubscribe(S2, EventKind::AppTick), 0);
        assert_eq!(registry.unsubscribe(S1, Category::KEY), 0);
        assert_eq!(registry.unsubscribe_all(S2), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_entry_kept_without_pruning() {
        let mut registry = SubscriptionRegistry::new();
        registry.subscribe(S1, EventKind::AppTick, noop);
        registry.subscribe(S2, EventKind::AppTick, noop);

        registry.unsubscribe(S1, EventKind::AppTick);
        assert!(registry.contains(S1));

        registry.subscribe(S1, EventKind::AppTick, noop);
        assert_eq!(registry.subscribers().collect::<Vec<_>>(), vec![S1, S2]);
    }

    #[test]
    fn test_pruning_moves_resubscriber_to_end() {
        let mut registry = SubscriptionRegistry::new().with_pruning(true);
        registry.subscribe(S1, EventKind::AppTick, noop);
        registry.subscribe(S2, EventKind::AppTick, noop);

        registry.unsubscribe(S1, Category::APP);
        assert!(!registry.contains(S1));

        registry.subscribe(S1, EventKind::AppTick, noop);
        assert_eq!(registry.subscribers().collect::<Vec<_>>(), vec![S2, S1]);
    }

    #[test]
    fn test_first_match_wins() {
        let mut registry = SubscriptionRegistry::new();
        registry.subscribe(S1, EventKind::WindowResize, |_: &mut Event| false);
        registry.subscribe(S1, EventKind::KeyPressed, |_: &mut Event| true);
        registry.subscribe(S1, EventKind::KeyPressed, |_: &mut Event| false);

        let mut event = Event::new(KeyPressed::new(KeyCode::A));
        let entry = registry.entries_mut().next().unwrap();
        let first = entry.first_match_mut(&event).unwrap();
        assert_eq!(first.kind(), EventKind::KeyPressed);
        assert!(first.handle(&mut event).unwrap());

        let other = Event::new(WindowResized {
            width: 1,
            height: 1,
        });
        assert!(registry
            .entries_mut()
            .next()
            .unwrap()
            .first_match_mut(&other)
            .is_some());
    }

    #[test]
    fn test_clear() {
        let mut registry = SubscriptionRegistry::new();
        registry.subscribe(S1, EventKind::AppTick, noop);
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.subscriber_count(), 0);
    }
}
