//! FIFO queue of unmatched proposers.
//!
//! ## Ordering
//!
//! Proposers are served strictly first-in, first-out. Any fair order yields
//! the same proposer-optimal matching, but FIFO also fixes the sequence of
//! engage/reject events, which keeps runs reproducible.
//!
//! ## Capacity
//!
//! Backed by a growable `VecDeque`. With [`FreeSetCapacity::Bounded`] an
//! enqueue beyond the bound fails with [`FreeSetError::Overflow`].

use std::collections::VecDeque;

use crate::engine::FreeSetCapacity;
use crate::error::FreeSetError;
use crate::types::ParticipantId;

/// Queue of proposers waiting for their next proposal.
#[derive(Debug, Clone, Default)]
pub struct FreeSet {
    queue: VecDeque<ParticipantId>,
    capacity: FreeSetCapacity,
}

impl FreeSet {
    /// Create an empty queue with the given capacity policy
    pub fn new(capacity: FreeSetCapacity) -> Self {
        let queue = match capacity {
            FreeSetCapacity::Unbounded => VecDeque::new(),
            FreeSetCapacity::Bounded(limit) => VecDeque::with_capacity(limit),
        };
        Self { queue, capacity }
    }

    /// Create a queue seeded with proposers `1..=n` in order
    ///
    /// # Errors
    ///
    /// Returns [`FreeSetError::Overflow`] if `n` exceeds the bound.
    pub fn seeded(n: usize, capacity: FreeSetCapacity) -> Result<Self, FreeSetError> {
        let mut free = Self::new(capacity);
        for proposer in 1..=n {
            free.enqueue(proposer as ParticipantId)?;
        }
        Ok(free)
    }

    /// Append a proposer at the back
    pub fn enqueue(&mut self, proposer: ParticipantId) -> Result<(), FreeSetError> {
        if let FreeSetCapacity::Bounded(limit) = self.capacity {
            if self.queue.len() >= limit {
                return Err(FreeSetError::Overflow { capacity: limit });
            }
        }
        self.queue.push_back(proposer);
        Ok(())
    }

    /// Take the proposer at the front
    pub fn dequeue(&mut self) -> Result<ParticipantId, FreeSetError> {
        self.queue.pop_front().ok_or(FreeSetError::Underflow)
    }

    /// Check if no proposer is waiting
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of waiting proposers
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether `proposer` is currently queued
    pub fn contains(&self, proposer: ParticipantId) -> bool {
        self.queue.contains(&proposer)
    }
}
