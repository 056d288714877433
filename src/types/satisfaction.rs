//! Satisfaction metrics over a final matching.
//!
//! Averages are computed with `rust_decimal` so reports are identical on
//! every platform; no floating point is involved.

use rust_decimal::Decimal;

use crate::types::Pairing;

/// Decimal places kept in reported averages.
pub const MEAN_DP: u32 = 4;

/// Aggregate rank statistics for one matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Satisfaction {
    /// Number of engaged pairs
    pub matched: u64,

    /// Sum of each proposer's rank for its partner
    pub proposer_rank_total: u64,

    /// Sum of each receiver's rank for its partner
    pub receiver_rank_total: u64,
}

impl Satisfaction {
    /// Accumulate statistics over `pairings`
    pub fn from_pairings(pairings: &[Pairing]) -> Self {
        pairings.iter().fold(Self::default(), |mut acc, p| {
            acc.matched += 1;
            acc.proposer_rank_total += u64::from(p.proposer_rank);
            acc.receiver_rank_total += u64::from(p.receiver_rank);
            acc
        })
    }

    /// Egalitarian cost: total rank over both sides (lower is better)
    pub fn egalitarian_cost(&self) -> u64 {
        self.proposer_rank_total + self.receiver_rank_total
    }

    /// Mean rank proposers assign to their partners
    ///
    /// Returns None for an empty matching.
    pub fn mean_proposer_rank(&self) -> Option<Decimal> {
        mean(self.proposer_rank_total, self.matched)
    }

    /// Mean rank receivers assign to their partners
    pub fn mean_receiver_rank(&self) -> Option<Decimal> {
        mean(self.receiver_rank_total, self.matched)
    }
}

fn mean(total: u64, count: u64) -> Option<Decimal> {
    if count == 0 {
        return None;
    }
    let value = Decimal::from(total).checked_div(Decimal::from(count))?;
    Some(value.round_dp(MEAN_DP))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfaction_empty() {
        let s = Satisfaction::from_pairings(&[]);
        assert_eq!(s.matched, 0);
        assert_eq!(s.egalitarian_cost(), 0);
        assert!(s.mean_proposer_rank().is_none());
        assert!(s.mean_receiver_rank().is_none());
    }

    #[test]
    fn test_satisfaction_totals() {
        let pairings = vec![
            Pairing::new(1, 2, 1, 2),
            Pairing::new(2, 1, 1, 1),
            Pairing::new(3, 3, 3, 1),
        ];
        let s = Satisfaction::from_pairings(&pairings);

        assert_eq!(s.matched, 3);
        assert_eq!(s.proposer_rank_total, 5);
        assert_eq!(s.receiver_rank_total, 4);
        assert_eq!(s.egalitarian_cost(), 9);
    }

    #[test]
    fn test_satisfaction_means_are_fixed_point() {
        let pairings = vec![
            Pairing::new(1, 2, 1, 2),
            Pairing::new(2, 1, 1, 1),
            Pairing::new(3, 3, 3, 1),
        ];
        let s = Satisfaction::from_pairings(&pairings);

        // 5 / 3 = 1.6667 at four decimal places
        assert_eq!(s.mean_proposer_rank(), Some(Decimal::new(16667, 4)));
        assert_eq!(s.mean_receiver_rank(), Some(Decimal::new(13333, 4)));
    }
}
