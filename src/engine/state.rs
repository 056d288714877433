//! Paired proposer/receiver mappings.
//!
//! ## Invariant
//!
//! For every engaged pair, `receiver_of(p) == Some(r)` if and only if
//! `proposer_of(r) == Some(p)`. Both sides are only ever written together
//! by [`MatchingState::engage`], so there is a single code path that can
//! break the invariant.

use crate::types::{ParticipantId, UNMATCHED};

/// Current (possibly tentative) matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingState {
    /// Partner of proposer `i + 1`, 0 = unmatched
    proposer_to_receiver: Vec<ParticipantId>,

    /// Partner of receiver `j + 1`, 0 = unmatched
    receiver_to_proposer: Vec<ParticipantId>,
}

impl MatchingState {
    /// Everyone unmatched
    pub fn new(n: usize) -> Self {
        Self {
            proposer_to_receiver: vec![UNMATCHED; n],
            receiver_to_proposer: vec![UNMATCHED; n],
        }
    }

    /// Group size
    #[inline]
    pub fn group_size(&self) -> usize {
        self.proposer_to_receiver.len()
    }

    /// Current partner of `proposer`
    #[inline]
    pub fn receiver_of(&self, proposer: ParticipantId) -> Option<ParticipantId> {
        partner(&self.proposer_to_receiver, proposer)
    }

    /// Current partner of `receiver`
    #[inline]
    pub fn proposer_of(&self, receiver: ParticipantId) -> Option<ParticipantId> {
        partner(&self.receiver_to_proposer, receiver)
    }

    /// Engage `proposer` and `receiver`, breaking their previous pairings
    ///
    /// # Returns
    ///
    /// The proposer previously engaged to `receiver`, now unmatched.
    ///
    /// # Panics
    ///
    /// Panics if either identifier is outside `1..=n`.
    pub fn engage(&mut self, proposer: ParticipantId, receiver: ParticipantId) -> Option<ParticipantId> {
        let p = proposer as usize - 1;
        let r = receiver as usize - 1;

        let previous_receiver = self.proposer_to_receiver[p];
        if previous_receiver != UNMATCHED {
            self.receiver_to_proposer[previous_receiver as usize - 1] = UNMATCHED;
        }

        let displaced = match self.receiver_to_proposer[r] {
            UNMATCHED => None,
            other => {
                self.proposer_to_receiver[other as usize - 1] = UNMATCHED;
                Some(other)
            }
        };

        self.proposer_to_receiver[p] = receiver;
        self.receiver_to_proposer[r] = proposer;
        displaced
    }

    /// Number of engaged pairs
    pub fn matched_count(&self) -> usize {
        self.proposer_to_receiver
            .iter()
            .filter(|&&r| r != UNMATCHED)
            .count()
    }

    /// Partner of each proposer in identifier order, 0 = unmatched
    pub fn assignments(&self) -> &[ParticipantId] {
        &self.proposer_to_receiver
    }

    /// Verify that both mappings agree
    pub fn is_consistent(&self) -> bool {
        let forward = self.proposer_to_receiver.iter().enumerate().all(|(p, &r)| {
            r == UNMATCHED || self.receiver_to_proposer[r as usize - 1] as usize == p + 1
        });
        let backward = self.receiver_to_proposer.iter().enumerate().all(|(r, &p)| {
            p == UNMATCHED || self.proposer_to_receiver[p as usize - 1] as usize == r + 1
        });
        forward && backward
    }

    /// Consume into the proposer-order assignments
    pub fn into_assignments(self) -> Vec<ParticipantId> {
        self.proposer_to_receiver
    }
}

fn partner(mapping: &[ParticipantId], id: ParticipantId) -> Option<ParticipantId> {
    let index = (id as usize).checked_sub(1)?;
    match mapping.get(index) {
        Some(&UNMATCHED) | None => None,
        Some(&partner) => Some(partner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_new() {
        let state = MatchingState::new(3);

        assert_eq!(state.group_size(), 3);
        assert_eq!(state.matched_count(), 0);
        assert_eq!(state.assignments(), &[0, 0, 0]);
        assert!(state.is_consistent());
        assert_eq!(state.receiver_of(0), None);
        assert_eq!(state.proposer_of(4), None);
    }

    #[test]
    fn test_engage_free_receiver() {
        let mut state = MatchingState::new(3);

        assert_eq!(state.engage(1, 2), None);
        assert_eq!(state.receiver_of(1), Some(2));
        assert_eq!(state.proposer_of(2), Some(1));
        assert_eq!(state.matched_count(), 1);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_engage_displaces_partner() {
        let mut state = MatchingState::new(2);
        state.engage(1, 1);

        assert_eq!(state.engage(2, 1), Some(1));
        assert_eq!(state.receiver_of(1), None);
        assert_eq!(state.receiver_of(2), Some(1));
        assert_eq!(state.proposer_of(1), Some(2));
        assert!(state.is_consistent());
    }

    #[test]
    fn test_engage_moves_proposer() {
        let mut state = MatchingState::new(2);
        state.engage(1, 1);

        // Re-engaging frees the proposer's previous receiver
        assert_eq!(state.engage(1, 2), None);
        assert_eq!(state.proposer_of(1), None);
        assert_eq!(state.assignments(), &[2, 0]);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_engage_same_pair_is_idempotent() {
        let mut state = MatchingState::new(1);
        state.engage(1, 1);

        assert_eq!(state.engage(1, 1), None);
        assert_eq!(state.into_assignments(), vec![1]);
    }
}
