//! Subscriber identity.

use std::fmt;

/// Opaque identifier of a subscriber.
///
/// Subscribers pick their own id; the bus only uses it to group
/// subscriptions and never interprets the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(pub u64);

impl SubscriberId {
    /// Returns the raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for SubscriberId {
    fn from(id: u64) -> Self {
        SubscriberId(id)
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
