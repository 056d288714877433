//! Match receipt summarizing one engine run.
//!
//! The MatchReceipt provides a compact, deterministic summary of a run,
//! including a matching root for verification.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::error::EngineError;
use crate::types::Pairing;

/// Receipt summarizing a completed matching run.
///
/// ## Matching Root
///
/// The 32-byte matching root is a SHA-256 hash over the SSZ encodings of
/// all pairings, in proposer order. Two runs on the same input produce the
/// same root; any difference in the final matching changes it.
///
/// ## Example
///
/// ```
/// use stable_match::types::{MatchReceipt, Pairing};
///
/// let pairings = vec![Pairing::new(1, 1, 1, 1)];
/// let receipt = MatchReceipt::from_pairings(1, 1, 0, 0, &pairings).unwrap();
///
/// assert!(receipt.is_complete());
/// assert_eq!(receipt.matching_root_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Number of participants per group (n)
    pub group_size: u64,

    /// Proposals made during the run
    pub proposals: u64,

    /// Proposals that ended in rejection (including displaced partners)
    pub rejections: u64,

    /// Proposers left without a partner
    pub unmatched: u64,

    /// SHA-256 over the SSZ-encoded pairings
    pub matching_root: [u8; 32],
}

impl MatchReceipt {
    /// Create a new receipt from precomputed parts
    pub fn new(
        group_size: u64,
        proposals: u64,
        rejections: u64,
        unmatched: u64,
        matching_root: [u8; 32],
    ) -> Self {
        Self {
            group_size,
            proposals,
            rejections,
            unmatched,
            matching_root,
        }
    }

    /// Create a receipt whose root is computed from `pairings`
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Encoding`] if a pairing fails to serialize.
    pub fn from_pairings(
        group_size: u64,
        proposals: u64,
        rejections: u64,
        unmatched: u64,
        pairings: &[Pairing],
    ) -> Result<Self, EngineError> {
        let matching_root = Self::compute_root(pairings)?;
        Ok(Self::new(group_size, proposals, rejections, unmatched, matching_root))
    }

    /// Hash the SSZ encodings of `pairings` in order
    pub fn compute_root(pairings: &[Pairing]) -> Result<[u8; 32], EngineError> {
        let mut hasher = Sha256::new();
        for pairing in pairings {
            let bytes =
                ssz_rs::serialize(pairing).map_err(|e| EngineError::Encoding(e.to_string()))?;
            hasher.update(&bytes);
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        Ok(root)
    }

    /// Get the matching root as a hex string
    pub fn matching_root_hex(&self) -> String {
        hex::encode(self.matching_root)
    }

    /// Check whether every proposer ended up matched
    pub fn is_complete(&self) -> bool {
        self.unmatched == 0
    }

    /// Fraction of proposals that were rejected
    ///
    /// Returns None if no proposals were made.
    pub fn rejection_rate(&self) -> Option<Decimal> {
        if self.proposals == 0 {
            None
        } else {
            Decimal::from(self.rejections).checked_div(Decimal::from(self.proposals))
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
