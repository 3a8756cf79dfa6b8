//! Diagnostic connection bookkeeping.
//!
//! Ids label log lines and the gauge tracks how many connection tasks are
//! alive. Never used for synchronization or to cap concurrency.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tracing::warn;

/// Advisory bound on concurrently served clients. Nothing enforces it;
/// crossing it only logs a warning.
pub const ADVISORY_CAPACITY: usize = 1000;

#[derive(Debug, Default)]
pub struct ConnectionTable {
    next_id: AtomicU64,
    in_flight: AtomicUsize,
}

/// Entry handed to a connection task; the slot is cleared on drop.
pub struct ConnectionTicket {
    id: u64,
    table: Arc<ConnectionTable>,
}

impl ConnectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(self: &Arc<Self>) -> ConnectionTicket {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let live = self.in_flight.fetch_add(1, Ordering::Relaxed) + 1;

        if live > ADVISORY_CAPACITY {
            warn!(
                in_flight = live,
                capacity = ADVISORY_CAPACITY,
                "Connections in flight exceed advisory capacity"
            );
        }

        ConnectionTicket {
            id,
            table: self.clone(),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Relaxed)
    }
}

impl ConnectionTicket {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ConnectionTicket {
    fn drop(&mut self) {
        self.table.in_flight.fetch_sub(1, Ordering::Relaxed);
    }
}
