//! Stability verification for a finished matching.
//!
//! A pair `(p, r)` blocks a matching when both would rather be with each
//! other than with their current partners. Unmatched participants prefer
//! any partner to none.

use crate::preferences::PreferenceProfile;
use crate::types::{in_range, ParticipantId, UNMATCHED};

/// A proposer and receiver who both prefer each other to their partners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockingPair {
    pub proposer: ParticipantId,
    pub receiver: ParticipantId,
}

/// Check that `assignments` is a one-to-one partial matching of size `n`
///
/// `assignments[i]` is the receiver of proposer `i + 1`, 0 = unmatched.
pub fn is_valid_matching(assignments: &[ParticipantId], n: usize) -> bool {
    if assignments.len() != n {
        return false;
    }
    let mut taken = vec![false; n];
    for &receiver in assignments {
        if receiver == UNMATCHED {
            continue;
        }
        if !in_range(receiver, n) || taken[receiver as usize - 1] {
            return false;
        }
        taken[receiver as usize - 1] = true;
    }
    true
}

/// Find the first blocking pair of `assignments` under `profile`
///
/// Proposers are scanned in identifier order and, for each, receivers in
/// that proposer's preference order up to its current partner. Entries
/// outside `1..=n` are treated as unmatched.
pub fn find_blocking_pair(
    profile: &PreferenceProfile,
    assignments: &[ParticipantId],
) -> Option<BlockingPair> {
    let n = profile.group_size();
    let receiver_ranks = profile.receiver_ranks();

    let partner_of = |proposer: usize| {
        assignments
            .get(proposer)
            .copied()
            .filter(|&r| in_range(r, n))
    };

    let mut receiver_partner = vec![UNMATCHED; n];
    for proposer in 0..n {
        if let Some(receiver) = partner_of(proposer) {
            receiver_partner[receiver as usize - 1] = proposer as ParticipantId + 1;
        }
    }

    for (index, list) in profile.proposer_lists().iter().enumerate() {
        let proposer = index as ParticipantId + 1;
        let current = partner_of(index);

        for &receiver in list {
            if Some(receiver) == current {
                break;
            }
            let rival = receiver_partner[receiver as usize - 1];
            if rival == UNMATCHED || receiver_ranks.prefers(receiver, proposer, rival) {
                return Some(BlockingPair { proposer, receiver });
            }
        }
    }

    None
}

/// Whether `assignments` has no blocking pair under `profile`
pub fn is_stable(profile: &PreferenceProfile, assignments: &[ParticipantId]) -> bool {
    find_blocking_pair(profile, assignments).is_none()
}
