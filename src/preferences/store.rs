//! Preference store: every proposer's queue over one node arena.
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n * n)` pre-allocates every list entry up front
//! - Popped entries are removed; the slab shrinks in use as proposals happen
//! - O(1) insert, remove, and lookup
//!
//! ## Example
//!
//! ```
//! use stable_match::preferences::PreferenceStore;
//!
//! let mut store = PreferenceStore::from_lists(&[vec![2, 1], vec![1, 2]]);
//!
//! assert_eq!(store.pop_next(1), Ok(2));
//! assert_eq!(store.remaining(1), vec![1]);
//! assert!(!store.is_exhausted(2));
//! ```

use slab::Slab;

use crate::error::QueueError;
use crate::preferences::{PreferenceNode, PreferenceProfile, PreferenceQueue};
use crate::types::ParticipantId;

/// Owner of all proposer preference queues for one run.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    /// Pre-allocated list entries
    /// Key: slab index, Value: PreferenceNode
    nodes: Slab<PreferenceNode>,

    /// Queue of proposer `i + 1` at index `i`
    queues: Vec<PreferenceQueue>,
}

impl PreferenceStore {
    /// Build queues from ordered receiver lists, one per proposer
    pub fn from_lists(lists: &[Vec<ParticipantId>]) -> Self {
        let entries = lists.iter().map(Vec::len).sum();
        let mut nodes = Slab::with_capacity(entries);

        let queues = lists
            .iter()
            .enumerate()
            .map(|(index, list)| {
                let mut queue = PreferenceQueue::new(index as ParticipantId + 1);
                for &receiver in list {
                    queue.push_back(receiver, &mut nodes);
                }
                queue
            })
            .collect();

        Self { nodes, queues }
    }

    /// Build from the proposer side of a validated profile
    pub fn from_profile(profile: &PreferenceProfile) -> Self {
        Self::from_lists(profile.proposer_lists())
    }

    // ========================================================================
    // Size
    // ========================================================================

    /// Number of proposers
    #[inline]
    pub fn proposer_count(&self) -> usize {
        self.queues.len()
    }

    /// Total untried entries across all proposers
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.nodes.len()
    }

    // ========================================================================
    // Queue Access
    // ========================================================================

    /// Get a proposer's queue
    #[inline]
    pub fn queue(&self, proposer: ParticipantId) -> Option<&PreferenceQueue> {
        let index = (proposer as usize).checked_sub(1)?;
        self.queues.get(index)
    }

    /// Whether `proposer` has no receiver left to try
    ///
    /// Unknown proposers count as exhausted.
    #[inline]
    pub fn is_exhausted(&self, proposer: ParticipantId) -> bool {
        self.queue(proposer).map_or(true, PreferenceQueue::is_empty)
    }

    /// Pop `proposer`'s most-preferred untried receiver
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Exhausted`] if the queue is empty or the
    /// proposer is unknown.
    pub fn pop_next(&mut self, proposer: ParticipantId) -> Result<ParticipantId, QueueError> {
        let queue = (proposer as usize)
            .checked_sub(1)
            .and_then(|index| self.queues.get_mut(index))
            .ok_or(QueueError::Exhausted { proposer })?;
        queue.pop_next(&mut self.nodes)
    }

    /// Untried receivers of `proposer`, most-preferred first
    pub fn remaining(&self, proposer: ParticipantId) -> Vec<ParticipantId> {
        self.queue(proposer)
            .map(|queue| queue.remaining_receivers(&self.nodes))
            .unwrap_or_default()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
