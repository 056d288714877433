//! Validated preference input.
//!
//! A [`PreferenceProfile`] is the only way into the engine. Building one
//! checks the whole input contract up front, so a run never starts on data
//! that could make it produce a wrong matching:
//!
//! - both groups have the same size `n`
//! - every list holds exactly `n` entries
//! - every entry is in `1..=n`
//! - no entry repeats within a list

use tracing::debug;

use crate::error::{MalformedReason, PreferenceError};
use crate::preferences::RankTable;
use crate::types::{in_range, Group, ParticipantId};

/// Complete, strict preference input for both groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceProfile {
    n: usize,
    proposers: Vec<Vec<ParticipantId>>,
    receivers: Vec<Vec<ParticipantId>>,
}

impl PreferenceProfile {
    /// Validate and wrap both groups' lists
    ///
    /// `proposers[i]` is the ordered receiver list of proposer `i + 1`,
    /// `receivers[j]` the ordered proposer list of receiver `j + 1`.
    ///
    /// # Errors
    ///
    /// - [`PreferenceError::GroupSizeMismatch`] if the group sizes differ
    /// - [`PreferenceError::MalformedPreferenceList`] for the first bad list,
    ///   proposers checked before receivers
    ///
    /// # Example
    ///
    /// ```
    /// use stable_match::preferences::PreferenceProfile;
    ///
    /// let profile = PreferenceProfile::new(
    ///     vec![vec![1, 2], vec![2, 1]],
    ///     vec![vec![1, 2], vec![1, 2]],
    /// ).unwrap();
    /// assert_eq!(profile.group_size(), 2);
    ///
    /// let err = PreferenceProfile::new(vec![vec![1, 1], vec![2, 1]], vec![vec![1, 2], vec![1, 2]]);
    /// assert!(err.is_err());
    /// ```
    pub fn new(
        proposers: Vec<Vec<ParticipantId>>,
        receivers: Vec<Vec<ParticipantId>>,
    ) -> Result<Self, PreferenceError> {
        if proposers.len() != receivers.len() {
            return Err(PreferenceError::GroupSizeMismatch {
                proposers: proposers.len(),
                receivers: receivers.len(),
            });
        }

        let n = proposers.len();
        for (group, lists) in [(Group::Proposer, &proposers), (Group::Receiver, &receivers)] {
            for (index, list) in lists.iter().enumerate() {
                validate_list(group, index as ParticipantId + 1, list, n)?;
            }
        }

        debug!(n, "preference profile validated");
        Ok(Self {
            n,
            proposers,
            receivers,
        })
    }

    /// Number of participants per group
    #[inline]
    pub fn group_size(&self) -> usize {
        self.n
    }

    /// Check if the profile has no participants
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// All proposer lists, index `i` belonging to proposer `i + 1`
    pub fn proposer_lists(&self) -> &[Vec<ParticipantId>] {
        &self.proposers
    }

    /// All receiver lists, index `j` belonging to receiver `j + 1`
    pub fn receiver_lists(&self) -> &[Vec<ParticipantId>] {
        &self.receivers
    }

    /// Ordered list of one proposer
    pub fn proposer_list(&self, proposer: ParticipantId) -> Option<&[ParticipantId]> {
        list_of(&self.proposers, proposer)
    }

    /// Ordered list of one receiver
    pub fn receiver_list(&self, receiver: ParticipantId) -> Option<&[ParticipantId]> {
        list_of(&self.receivers, receiver)
    }

    /// Rank table keyed by receiver (the table the engine consults)
    pub fn receiver_ranks(&self) -> RankTable {
        RankTable::from_lists(&self.receivers)
    }

    /// Rank table keyed by proposer
    pub fn proposer_ranks(&self) -> RankTable {
        RankTable::from_lists(&self.proposers)
    }

    /// Split back into the raw lists
    pub fn into_lists(self) -> (Vec<Vec<ParticipantId>>, Vec<Vec<ParticipantId>>) {
        (self.proposers, self.receivers)
    }
}

fn list_of(lists: &[Vec<ParticipantId>], id: ParticipantId) -> Option<&[ParticipantId]> {
    let index = (id as usize).checked_sub(1)?;
    lists.get(index).map(Vec::as_slice)
}

/// Check one list against the `n`-permutation contract.
fn validate_list(
    group: Group,
    participant: ParticipantId,
    list: &[ParticipantId],
    n: usize,
) -> Result<(), PreferenceError> {
    let malformed = |reason| PreferenceError::MalformedPreferenceList {
        group,
        participant,
        reason,
    };

    if list.len() != n {
        return Err(malformed(MalformedReason::WrongLength {
            expected: n,
            actual: list.len(),
        }));
    }

    let mut seen = vec![false; n];
    for &id in list {
        if !in_range(id, n) {
            return Err(malformed(MalformedReason::OutOfRange { id, n }));
        }
        let slot = &mut seen[id as usize - 1];
        if *slot {
            return Err(malformed(MalformedReason::Duplicate { id }));
        }
        *slot = true;
    }

    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(n: u32) -> Vec<Vec<ParticipantId>> {
        (0..n).map(|_| (1..=n).collect()).collect()
    }

    #[test]
    fn test_profile_valid() {
        let profile = PreferenceProfile::new(
            vec![vec![2, 1, 3], vec![1, 2, 3], vec![1, 2, 3]],
            identity(3),
        )
        .unwrap();

        assert_eq!(profile.group_size(), 3);
        assert!(!profile.is_empty());
        assert_eq!(profile.proposer_list(1), Some(&[2, 1, 3][..]));
        assert_eq!(profile.receiver_list(3), Some(&[1, 2, 3][..]));
        assert_eq!(profile.proposer_list(0), None);
        assert_eq!(profile.proposer_list(4), None);
    }

    #[test]
    fn test_profile_empty_is_valid() {
        let profile = PreferenceProfile::new(vec![], vec![]).unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn test_profile_group_size_mismatch() {
        let err = PreferenceProfile::new(identity(2), identity(3)).unwrap_err();
        assert_eq!(
            err,
            PreferenceError::GroupSizeMismatch {
                proposers: 2,
                receivers: 3
            }
        );
    }

    #[test]
    fn test_profile_duplicate() {
        let err = PreferenceProfile::new(
            vec![vec![1, 2, 3], vec![2, 2, 3], vec![1, 2, 3]],
            identity(3),
        )
        .unwrap_err();

        assert_eq!(
            err,
            PreferenceError::MalformedPreferenceList {
                group: Group::Proposer,
                participant: 2,
                reason: MalformedReason::Duplicate { id: 2 },
            }
        );
    }

    #[test]
    fn test_profile_receiver_duplicate() {
        let err = PreferenceProfile::new(
            identity(3),
            vec![vec![1, 2, 3], vec![3, 1, 2], vec![3, 1, 3]],
        )
        .unwrap_err();

        assert_eq!(
            err,
            PreferenceError::MalformedPreferenceList {
                group: Group::Receiver,
                participant: 3,
                reason: MalformedReason::Duplicate { id: 3 },
            }
        );
    }

    #[test]
    fn test_profile_wrong_length() {
        let err = PreferenceProfile::new(identity(2), vec![vec![1, 2], vec![1]]).unwrap_err();

        assert_eq!(
            err,
            PreferenceError::MalformedPreferenceList {
                group: Group::Receiver,
                participant: 2,
                reason: MalformedReason::WrongLength {
                    expected: 2,
                    actual: 1
                },
            }
        );
    }

    #[test]
    fn test_profile_out_of_range() {
        for bad in [0, 3] {
            let err =
                PreferenceProfile::new(vec![vec![1, 2], vec![bad, 1]], identity(2)).unwrap_err();
            assert_eq!(
                err,
                PreferenceError::MalformedPreferenceList {
                    group: Group::Proposer,
                    participant: 2,
                    reason: MalformedReason::OutOfRange { id: bad, n: 2 },
                }
            );
        }
    }

    #[test]
    fn test_profile_rank_tables() {
        let profile = PreferenceProfile::new(
            vec![vec![2, 1], vec![1, 2]],
            vec![vec![1, 2], vec![2, 1]],
        )
        .unwrap();

        let receivers = profile.receiver_ranks();
        assert_eq!(receivers.rank_of(2, 2), 1);
        assert_eq!(receivers.rank_of(2, 1), 2);

        let proposers = profile.proposer_ranks();
        assert_eq!(proposers.rank_of(1, 2), 1);
    }
}
