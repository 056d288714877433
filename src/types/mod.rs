//! Core data types for stable-match
//!
//! Result types implement SSZ serialization for deterministic encoding.
//!
//! ## Types
//!
//! - [`ParticipantId`]: Identifier in `1..=n`, with [`UNMATCHED`] = 0
//! - [`Group`]: Proposer or Receiver
//! - [`Pairing`]: A final (proposer, receiver) couple with both ranks
//! - [`MatchReceipt`]: Run summary with a SHA-256 matching root
//! - [`Satisfaction`]: Rank statistics with fixed-point averages

mod participant;
mod pairing;
mod receipt;
mod satisfaction;

pub use participant::{in_range, Group, ParticipantId, UNMATCHED};
pub use pairing::Pairing;
pub use receipt::MatchReceipt;
pub use satisfaction::Satisfaction;
