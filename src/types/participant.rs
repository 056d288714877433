//! Participant identifiers and group tags.
//!
//! Both groups use the identifier range `1..=n` independently: proposer 3
//! and receiver 3 are distinct participants. The value `0` is reserved for
//! "no partner" in every mapping and output.

use std::fmt;

/// Identifier of a participant, in `1..=n`.
pub type ParticipantId = u32;

/// Sentinel meaning "no current partner".
pub const UNMATCHED: ParticipantId = 0;

// ============================================================================
// Group enum
// ============================================================================

/// Which side of the market a participant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Group {
    /// Initiates proposals ("men" in the classic formulation)
    #[default]
    Proposer,
    /// Accepts or rejects proposals ("women")
    Receiver,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Proposer => f.write_str("proposer"),
            Group::Receiver => f.write_str("receiver"),
        }
    }
}

/// Check that `id` is a valid participant for a group of size `n`.
#[inline]
pub fn in_range(id: ParticipantId, n: usize) -> bool {
    id != UNMATCHED && (id as usize) <= n
}
