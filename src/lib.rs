//! # stable-match
//!
//! Proposer-optimal stable matching via Gale–Shapley deferred acceptance.
//!
//! ## Architecture
//!
//! - **Types**: Participant ids, pairings, receipts, satisfaction metrics
//! - **Preferences**: Validated profile, slab-backed preference queues,
//!   rank tables
//! - **Engine**: Free set, paired matching state, proposal loop, stability
//!   verification
//! - **Format**: Plain-text preference files and matching output
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical input gives an identical matching, event
//!    sequence and receipt
//! 2. **Validate first**: Malformed input is rejected before matching starts
//! 3. **No Floating Point**: Reported averages use fixed-point decimals
//! 4. **Synchronous Execution**: Single-threaded, no I/O in the loop
//!
//! ## Example
//!
//! ```
//! use stable_match::{is_stable, MatchingEngine, PreferenceProfile};
//!
//! let profile = PreferenceProfile::new(
//!     vec![vec![1, 2], vec![1, 2]],
//!     vec![vec![2, 1], vec![1, 2]],
//! ).unwrap();
//!
//! let result = MatchingEngine::new().solve(&profile).unwrap();
//! assert_eq!(result.assignments, vec![2, 1]);
//! assert!(is_stable(&profile, &result.assignments));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for every layer
pub mod error;

/// Core data types: ParticipantId, Pairing, MatchReceipt
pub mod types;

/// Preference storage: profiles, queues, rank tables
pub mod preferences;

/// Matching engine: deterministic deferred acceptance
pub mod engine;

/// Text input/output format
pub mod format;

/// Tracing subscriber setup
pub mod logging;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{EngineError, FormatError, PreferenceError};
pub use types::{Group, MatchReceipt, Pairing, ParticipantId, Satisfaction, UNMATCHED};
pub use preferences::{PreferenceProfile, RankTable};
pub use engine::{is_stable, EngineConfig, MatchEvent, MatchResult, MatchingEngine};
