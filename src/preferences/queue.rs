//! Per-proposer preference queue.
//!
//! ## Design
//!
//! A `PreferenceQueue` is the not-yet-tried part of one proposer's
//! preference list. Entries live in a shared slab as [`PreferenceNode`]s;
//! this struct only holds the queue metadata.
//!
//! ## Queue Structure
//!
//! ```text
//! head (next to propose to) -> entry2 -> entry3 -> tail (least preferred)
//! ```
//!
//! - Entries are appended at the tail while building
//! - Proposals consume entries from the head, irreversibly
//! - Popped nodes are removed from the slab

use slab::Slab;

use crate::error::QueueError;
use crate::preferences::PreferenceNode;
use crate::types::ParticipantId;

/// Remaining preference entries of a single proposer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceQueue {
    /// Owning proposer (used in error reports)
    pub proposer: ParticipantId,

    /// Most-preferred untried receiver (slab key)
    pub head: Option<usize>,

    /// Least-preferred receiver (slab key)
    pub tail: Option<usize>,

    /// Number of untried receivers
    pub remaining: usize,
}

impl PreferenceQueue {
    /// Create an empty queue for `proposer`
    pub fn new(proposer: ParticipantId) -> Self {
        Self {
            proposer,
            head: None,
            tail: None,
            remaining: 0,
        }
    }

    /// Check whether every receiver has been tried
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append `receiver` as the new least-preferred entry
    ///
    /// # Returns
    ///
    /// The slab key of the inserted node
    pub fn push_back(&mut self, receiver: ParticipantId, slab: &mut Slab<PreferenceNode>) -> usize {
        let key = slab.insert(PreferenceNode::new(receiver));

        match self.tail.and_then(|tail| slab.get_mut(tail)) {
            Some(tail_node) => tail_node.next = Some(key),
            None => self.head = Some(key),
        }

        self.tail = Some(key);
        self.remaining += 1;
        key
    }

    /// Pop the most-preferred untried receiver
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Exhausted`] when the queue is empty.
    pub fn pop_next(&mut self, slab: &mut Slab<PreferenceNode>) -> Result<ParticipantId, QueueError> {
        let exhausted = QueueError::Exhausted {
            proposer: self.proposer,
        };
        let key = self.head.ok_or(exhausted)?;
        let node = slab.try_remove(key).ok_or(exhausted)?;

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.remaining -= 1;

        Ok(node.receiver)
    }

    /// Peek at the next receiver without consuming it
    pub fn peek(&self, slab: &Slab<PreferenceNode>) -> Option<ParticipantId> {
        self.head.and_then(|key| slab.get(key)).map(|node| node.receiver)
    }

    /// Collect the untried receivers, most-preferred first
    pub fn remaining_receivers(&self, slab: &Slab<PreferenceNode>) -> Vec<ParticipantId> {
        let mut out = Vec::with_capacity(self.remaining);
        let mut cursor = self.head;
        while let Some(node) = cursor.and_then(|key| slab.get(key)) {
            out.push(node.receiver);
            cursor = node.next;
        }
        out
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
