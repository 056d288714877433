//! Matching engine module for stable-match.
//!
//! ## Design Principles
//!
//! The matching engine is designed for:
//!
//! 1. **Determinism**: Same input always produces the same matching and the
//!    same event sequence (FIFO free set)
//! 2. **Single-threaded**: No locks, no I/O and no suspension in the loop
//! 3. **Fail loudly**: Internal invariant violations abort the run
//!
//! ## Matching Rules
//!
//! - **Proposers** propose in their own preference order, once per receiver
//! - **Receivers** hold the best proposal seen so far (lowest rank)
//! - **Displaced** proposers rejoin the free set while they have options
//! - **Result** is the proposer-optimal stable matching
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::MatchingEngine;
//! use stable_match::preferences::PreferenceProfile;
//!
//! let profile = PreferenceProfile::new(
//!     vec![vec![2, 1, 3], vec![1, 2, 3], vec![1, 2, 3]],
//!     vec![vec![2, 1, 3], vec![1, 2, 3], vec![1, 2, 3]],
//! ).unwrap();
//!
//! let result = MatchingEngine::new().solve(&profile).unwrap();
//!
//! assert_eq!(result.assignments, vec![2, 1, 3]);
//! assert!(result.is_complete());
//! ```

pub mod config;
pub mod free_set;
pub mod state;
pub mod matcher;
pub mod stability;

pub use config::{EngineConfig, FreeSetCapacity};
pub use free_set::FreeSet;
pub use state::MatchingState;
pub use matcher::{MatchEvent, MatchResult, MatchingEngine};
pub use stability::{find_blocking_pair, is_stable, is_valid_matching, BlockingPair};
