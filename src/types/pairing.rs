//! Pairing type representing one engaged (proposer, receiver) couple.
//!
//! ## SSZ Serialization
//!
//! Pairings are serialized using SSZ for deterministic encoding.
//! The matching root in [`MatchReceipt`](crate::types::MatchReceipt) hashes
//! the concatenated encodings, so identical matchings always produce
//! identical roots.

use ssz_rs::prelude::*;

use crate::types::ParticipantId;

/// A final pairing between a proposer and a receiver.
///
/// ## Ranks
///
/// Both ranks are 1-based positions in the respective preference list
/// (1 = first choice). They are carried alongside the identifiers so that
/// downstream consumers can report satisfaction without the full profile.
///
/// ## Example
///
/// ```
/// use stable_match::types::Pairing;
///
/// let pairing = Pairing::new(
///     1,  // proposer
///     2,  // receiver
///     1,  // receiver 2 is the proposer's first choice
///     2,  // proposer 1 is the receiver's second choice
/// );
/// assert!(pairing.is_first_choice_for_proposer());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Pairing {
    /// Proposer identifier (1..=n)
    pub proposer: ParticipantId,

    /// Receiver identifier (1..=n)
    pub receiver: ParticipantId,

    /// Position of `receiver` in the proposer's list
    pub proposer_rank: u32,

    /// Position of `proposer` in the receiver's list
    pub receiver_rank: u32,
}

impl Pairing {
    /// Create a new pairing
    pub fn new(
        proposer: ParticipantId,
        receiver: ParticipantId,
        proposer_rank: u32,
        receiver_rank: u32,
    ) -> Self {
        Self {
            proposer,
            receiver,
            proposer_rank,
            receiver_rank,
        }
    }

    /// Whether the proposer got its most-preferred receiver
    pub fn is_first_choice_for_proposer(&self) -> bool {
        self.proposer_rank == 1
    }

    /// Sum of both ranks (the pair's contribution to the egalitarian cost)
    pub fn combined_rank(&self) -> u64 {
        u64::from(self.proposer_rank) + u64::from(self.receiver_rank)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
