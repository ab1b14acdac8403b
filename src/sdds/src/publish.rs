//! Latest-result slot for decodes that may overlap
//!
//! A caller that starts a new decode for a source before the previous one has
//! finished must not let the older result overwrite the newer one. Each decode
//! takes a [`Ticket`] up front; only the most recently issued ticket may
//! publish.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Issue order of one decode attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

struct Slot<T> {
    issued: u64,
    value: Option<Arc<T>>,
}

/// Thread-safe "latest decode wins" holder
pub struct Latest<T> {
    slot: Mutex<Slot<T>>,
}

impl<T> Latest<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot {
                issued: 0,
                value: None,
            }),
        }
    }

    /// Start a decode attempt, superseding every earlier ticket
    pub fn begin(&self) -> Ticket {
        let mut slot = self.lock();
        slot.issued += 1;
        Ticket(slot.issued)
    }

    /// Whether no newer attempt has started since `ticket`
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.lock().issued == ticket.0
    }

    /// Store `value` if `ticket` is still current
    ///
    /// Returns `false` and drops the value when a newer attempt has started.
    pub fn publish(&self, ticket: Ticket, value: T) -> bool {
        let mut slot = self.lock();
        if slot.issued != ticket.0 {
            tracing::debug!(
                ticket = ticket.0,
                latest = slot.issued,
                "dropping stale result"
            );
            return false;
        }
        slot.value = Some(Arc::new(value));
        true
    }

    /// Most recently published value
    pub fn get(&self) -> Option<Arc<T>> {
        self.lock().value.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        // Poisoning cannot leave the slot half-updated
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self::new()
    }
}
