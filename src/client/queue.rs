use std::collections::VecDeque;

use super::outcome::PendingRequest;

/// FIFO buffer for events submitted before the client is ready.
pub(super) struct SubmitQueue {
    /// Pending entries in arrival order.
    entries: VecDeque<PendingRequest>,

    /// Re-entrancy guard: set while a drain pass owns the removed batch.
    pub(super) draining: bool,

    /// Capacity bound (`0` = unbounded).
    capacity: usize,
}

impl SubmitQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            draining: false,
            capacity,
        }
    }

    /// Appends an entry, or hands it back when the queue is at capacity.
    pub fn push(&mut self, pending: PendingRequest) -> Result<(), PendingRequest> {
        if self.capacity > 0 && self.entries.len() >= self.capacity {
            return Err(pending);
        }
        self.entries.push_back(pending);
        Ok(())
    }

    /// Removes every entry, preserving arrival order.
    pub fn take_all(&mut self) -> Vec<PendingRequest> {
        self.entries.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
