//! Rank lookup table.
//!
//! ## Layout
//!
//! Ranks are stored in one flat row-major `Vec<u32>` of `n * n` entries:
//!
//! ```text
//! row (owner - 1): [rank(owner, 1), rank(owner, 2), ..., rank(owner, n)]
//! ```
//!
//! For the receiver side, `owner` is a receiver and the columns are
//! proposers; `rank_of(r, p) < rank_of(r, p2)` means `r` prefers `p`.
//! The same table built from proposer lists answers the mirrored question.

use crate::types::{in_range, ParticipantId};

/// Immutable `(owner, other) -> rank` lookup, 1 = most preferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    n: usize,
    ranks: Vec<u32>,
}

impl RankTable {
    /// Build from ordered preference lists
    ///
    /// `lists[i]` is the ordered list of participant `i + 1`; its j-th entry
    /// receives rank `j + 1`. Lists are expected to be validated
    /// permutations; identifiers outside `1..=n` are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use stable_match::preferences::RankTable;
    ///
    /// let table = RankTable::from_lists(&[vec![2, 1], vec![1, 2]]);
    /// assert_eq!(table.rank_of(1, 2), 1);
    /// assert_eq!(table.rank_of(1, 1), 2);
    /// ```
    pub fn from_lists(lists: &[Vec<ParticipantId>]) -> Self {
        let n = lists.len();
        let mut ranks = vec![0u32; n * n];

        for (row, list) in lists.iter().enumerate() {
            for (position, &id) in list.iter().enumerate() {
                if in_range(id, n) {
                    ranks[row * n + (id as usize - 1)] = position as u32 + 1;
                }
            }
        }

        Self { n, ranks }
    }

    /// Group size
    #[inline]
    pub fn group_size(&self) -> usize {
        self.n
    }

    /// Rank `owner` gives to `other`
    ///
    /// # Panics
    ///
    /// Panics if either identifier is outside `1..=n`.
    #[inline]
    pub fn rank_of(&self, owner: ParticipantId, other: ParticipantId) -> u32 {
        assert!(
            in_range(owner, self.n) && in_range(other, self.n),
            "rank lookup ({owner}, {other}) outside 1..={}",
            self.n
        );
        self.ranks[self.index(owner, other)]
    }

    /// Checked variant of [`rank_of`](Self::rank_of)
    ///
    /// Returns None for out-of-range identifiers or unranked pairs.
    #[inline]
    pub fn get(&self, owner: ParticipantId, other: ParticipantId) -> Option<u32> {
        if !in_range(owner, self.n) || !in_range(other, self.n) {
            return None;
        }
        match self.ranks[self.index(owner, other)] {
            0 => None,
            rank => Some(rank),
        }
    }

    /// Whether `owner` strictly prefers `a` over `b`
    #[inline]
    pub fn prefers(&self, owner: ParticipantId, a: ParticipantId, b: ParticipantId) -> bool {
        self.rank_of(owner, a) < self.rank_of(owner, b)
    }

    #[inline]
    fn index(&self, owner: ParticipantId, other: ParticipantId) -> usize {
        (owner as usize - 1) * self.n + (other as usize - 1)
    }
}
