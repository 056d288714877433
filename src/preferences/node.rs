//! Preference node for slab-based storage.
//!
//! ## Design
//!
//! `PreferenceNode` holds one entry of a proposer's preference list plus a
//! forward pointer to the next (less preferred) entry. Lists are only ever
//! consumed from the head, so a singly-linked chain is enough.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup

use crate::types::ParticipantId;

/// Preference node stored in the slab.
///
/// The pointer is a slab key (`usize`), not a direct reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceNode {
    /// Receiver at this position of the list
    pub receiver: ParticipantId,

    /// Next (less preferred) entry, None at the tail
    pub next: Option<usize>,
}

impl PreferenceNode {
    /// Create a new, unlinked node
    ///
    /// # Example
    ///
    /// ```
    /// use stable_match::preferences::PreferenceNode;
    ///
    /// let node = PreferenceNode::new(3);
    /// assert_eq!(node.receiver, 3);
    /// assert!(node.is_tail());
    /// ```
    #[inline]
    pub fn new(receiver: ParticipantId) -> Self {
        Self {
            receiver,
            next: None,
        }
    }

    /// Whether this node is the last entry of its list
    #[inline]
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }
}
