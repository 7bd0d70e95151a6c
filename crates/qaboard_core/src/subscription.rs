//! Key-addressed change propagation.
//!
//! # Responsibility
//! - Route a payload to the one subscriber registered under a key.
//! - Keep the store ignorant of how a subscriber applies the payload.
//!
//! # Invariants
//! - At most one subscriber per key; re-subscribing replaces the slot.
//! - Publishing to an unknown key is a silent no-op.
//! - Delivery is synchronous and happens exactly once per publish.
//!
//! Subscribers live in an arena owned by the caller (the store's question
//! list); the registry only remembers each key's slot in that arena.

use std::collections::HashMap;

/// Receiver of payloads published under its key.
pub trait Subscriber<P> {
    fn notify(&mut self, payload: &P);
}

/// Mapping from subscription key to arena slot.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionRegistry {
    slots: HashMap<String, usize>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `slot` under `key`, returning the slot it replaced.
    pub fn subscribe(&mut self, key: impl Into<String>, slot: usize) -> Option<usize> {
        self.slots.insert(key.into(), slot)
    }

    /// Returns the slot registered under `key`.
    pub fn slot(&self, key: &str) -> Option<usize> {
        self.slots.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Delivers `payload` to the subscriber registered under `key`.
    ///
    /// Returns `true` when a subscriber received the payload.
    pub fn publish<S, P>(&self, key: &str, subscribers: &mut [S], payload: &P) -> bool
    where
        S: Subscriber<P>,
    {
        let Some(slot) = self.slot(key) else {
            return false;
        };
        match subscribers.get_mut(slot) {
            Some(subscriber) => {
                subscriber.notify(payload);
                true
            }
            None => false,
        }
    }
}
