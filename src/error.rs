//! Error types for stable-match.
//!
//! ## Taxonomy
//!
//! | Error | Raised by | Meaning |
//! |-------|-----------|---------|
//! | [`PreferenceError`] | profile construction | Bad input data, fatal before matching |
//! | [`QueueError`] | preference queues | Popped an exhausted list (logic error) |
//! | [`FreeSetError`] | free-set queue | Underflow / overflow (logic or sizing error) |
//! | [`EngineError`] | matching engine | Any internal invariant violation |
//! | [`FormatError`] | text loader | Unreadable or malformed preference file |
//!
//! Construction errors abort before any matching work starts. Engine errors
//! abort the run instead of returning a silently wrong matching.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Group, ParticipantId};

/// Input validation failure, detected before matching starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// A list does not contain exactly `n` distinct identifiers in `1..=n`.
    #[error("malformed preference list for {group} {participant}: {reason}")]
    MalformedPreferenceList {
        group: Group,
        participant: ParticipantId,
        reason: MalformedReason,
    },

    /// The two groups have different sizes.
    #[error("group size mismatch: {proposers} proposers vs {receivers} receivers")]
    GroupSizeMismatch { proposers: usize, receivers: usize },
}

/// Why a single preference list was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("expected {expected} entries, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("identifier {id} is outside 1..={n}")]
    OutOfRange { id: ParticipantId, n: usize },

    #[error("identifier {id} is listed more than once")]
    Duplicate { id: ParticipantId },
}

/// Preference queue failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("preference list of proposer {proposer} is exhausted")]
    Exhausted { proposer: ParticipantId },
}

/// Free-set queue failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FreeSetError {
    #[error("free-set queue underflow")]
    Underflow,

    #[error("free-set queue overflow (capacity {capacity})")]
    Overflow { capacity: usize },
}

/// Unrecoverable failure inside a matching run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    FreeSet(#[from] FreeSetError),

    /// SSZ encoding of the result failed.
    #[error("failed to encode matching: {0}")]
    Encoding(String),
}

/// Failure while reading a preference file.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Reader failure with no file attached (in-memory or piped input).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Opening, reading or writing a named file failed.
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("missing group size (first line)")]
    MissingGroupSize,

    #[error("missing preference line for {group} {participant}")]
    MissingLine {
        group: Group,
        participant: ParticipantId,
    },

    #[error("expected {expected} preferences for {group} {participant}, got {actual}")]
    WrongCount {
        group: Group,
        participant: ParticipantId,
        expected: usize,
        actual: usize,
    },

    #[error("non-integer where integer expected: {token:?}")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Preference(#[from] PreferenceError),
}

impl FormatError {
    /// Attach `path` to a bare I/O failure; other variants pass through.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            FormatError::Io(source) => FormatError::File {
                path: path.into(),
                source,
            },
            other => other,
        }
    }

    /// Underlying I/O error kind, if this is an I/O failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            FormatError::Io(source) | FormatError::File { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = PreferenceError::MalformedPreferenceList {
            group: Group::Proposer,
            participant: 2,
            reason: MalformedReason::Duplicate { id: 3 },
        };
        assert_eq!(
            err.to_string(),
            "malformed preference list for proposer 2: identifier 3 is listed more than once"
        );
    }

    #[test]
    fn test_engine_error_from() {
        let err: EngineError = FreeSetError::Underflow.into();
        assert_eq!(err, EngineError::FreeSet(FreeSetError::Underflow));

        let err: EngineError = QueueError::Exhausted { proposer: 4 }.into();
        assert_eq!(err.to_string(), "preference list of proposer 4 is exhausted");
    }

    #[test]
    fn test_file_error_names_path() {
        let err = FormatError::from(io::Error::from(io::ErrorKind::NotFound)).with_path("men.txt");

        assert!(err.to_string().starts_with("men.txt: "));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
        assert_eq!(FormatError::MissingGroupSize.with_path("men.txt").io_kind(), None);
    }
}
