//! Provider key rotation for the content-assist proxy
//!
//! Keys are handed out round-robin, preferring the key with the fewest
//! requests in flight. Callers hold a [`Lease`] for the duration of one
//! upstream call and return it with [`KeyPool::release`].

pub struct KeyPool {
    slots: Vec<KeySlot>,
    next: usize,
}

struct KeySlot {
    key: String,
    in_flight: usize,
}

/// A checked-out key. Return it with [`KeyPool::release`] once the
/// upstream call finishes, success or not.
#[derive(Debug)]
pub struct Lease {
    pub key: String,
    index: usize,
}

impl KeyPool {
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            slots: keys
                .into_iter()
                .map(|key| KeySlot { key, in_flight: 0 })
                .collect(),
            next: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check out the next key in rotation. Returns `None` when no keys
    /// are configured.
    pub fn acquire(&mut self) -> Option<Lease> {
        if self.slots.is_empty() {
            return None;
        }
        let len = self.slots.len();
        // Scan from the rotation point for the least-loaded slot
        let mut best = self.next % len;
        for offset in 0..len {
            let index = (self.next + offset) % len;
            if self.slots[index].in_flight < self.slots[best].in_flight {
                best = index;
            }
        }
        self.next = (best + 1) % len;
        self.slots[best].in_flight += 1;
        Some(Lease {
            key: self.slots[best].key.clone(),
            index: best,
        })
    }

    pub fn release(&mut self, lease: Lease) {
        let slot = &mut self.slots[lease.index];
        slot.in_flight = slot.in_flight.saturating_sub(1);
    }
}
