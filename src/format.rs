//! Plain-text preference files and matching output.
//!
//! ## Input Layout
//!
//! ```text
//! 3          <- group size n (first non-empty line)
//! 2 1 3      <- participant 1, most-preferred first
//! 1 2 3      <- participant 2
//! 1 2 3      <- participant 3
//! ```
//!
//! Blank lines are skipped anywhere; tokens are separated by any
//! whitespace. Lines after the n-th list are ignored.
//!
//! ## Output Layout
//!
//! One `proposer receiver` line per proposer in identifier order, with
//! receiver `0` for an unmatched proposer.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::FormatError;
use crate::preferences::PreferenceProfile;
use crate::types::{Group, ParticipantId};

/// Upper bound on lists reserved up front from the header value.
const MAX_PREALLOCATED_LISTS: usize = 1024;

/// Parse one group's preference lists from `reader`
///
/// Only the shape of the file is checked here (line count and token
/// count); identifier validity is checked by [`PreferenceProfile::new`].
///
/// # Example
///
/// ```
/// use stable_match::format::parse_preferences;
/// use stable_match::types::Group;
///
/// let lists = parse_preferences("2\n1 2\n\n2 1\n".as_bytes(), Group::Proposer).unwrap();
/// assert_eq!(lists, vec![vec![1, 2], vec![2, 1]]);
/// ```
pub fn parse_preferences<R: BufRead>(
    reader: R,
    group: Group,
) -> Result<Vec<Vec<ParticipantId>>, FormatError> {
    let mut lines = NonEmptyLines { inner: reader.lines() };

    let header = lines.next_line()?.ok_or(FormatError::MissingGroupSize)?;
    let n: usize = parse_token(&header)?;

    // The header is untrusted; lists are only allocated as lines arrive.
    let mut lists = Vec::with_capacity(n.min(MAX_PREALLOCATED_LISTS));
    for index in 0..n {
        let participant = index as ParticipantId + 1;
        let line = lines
            .next_line()?
            .ok_or(FormatError::MissingLine { group, participant })?;

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != n {
            return Err(FormatError::WrongCount {
                group,
                participant,
                expected: n,
                actual: tokens.len(),
            });
        }

        let list = tokens
            .into_iter()
            .map(parse_token)
            .collect::<Result<Vec<ParticipantId>, _>>()?;
        lists.push(list);
    }

    debug!(%group, n, "parsed preference lists");
    Ok(lists)
}

/// Read one group's preference lists from a file
pub fn read_preferences_file(
    path: impl AsRef<Path>,
    group: Group,
) -> Result<Vec<Vec<ParticipantId>>, FormatError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FormatError::File {
        path: path.to_path_buf(),
        source,
    })?;
    parse_preferences(BufReader::new(file), group).map_err(|err| err.with_path(path))
}

/// Load and validate both groups from their files
pub fn load_profile(
    proposers: impl AsRef<Path>,
    receivers: impl AsRef<Path>,
) -> Result<PreferenceProfile, FormatError> {
    let proposer_lists = read_preferences_file(proposers, Group::Proposer)?;
    let receiver_lists = read_preferences_file(receivers, Group::Receiver)?;
    Ok(PreferenceProfile::new(proposer_lists, receiver_lists)?)
}

/// Write `proposer receiver` lines in proposer order
pub fn write_assignments<W: Write>(mut writer: W, assignments: &[ParticipantId]) -> io::Result<()> {
    for (index, receiver) in assignments.iter().enumerate() {
        writeln!(writer, "{} {}", index + 1, receiver)?;
    }
    writer.flush()
}

/// Write the matching to a file, replacing any previous content
pub fn write_assignments_file(
    path: impl AsRef<Path>,
    assignments: &[ParticipantId],
) -> Result<(), FormatError> {
    let path = path.as_ref();
    File::create(path)
        .and_then(|file| write_assignments(BufWriter::new(file), assignments))
        .map_err(|source| FormatError::File {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_token<T>(token: &str) -> Result<T, FormatError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    let token = token.trim();
    token.parse().map_err(|source| FormatError::InvalidInteger {
        token: token.to_string(),
        source,
    })
}

/// Line iterator that trims and skips blank lines.
struct NonEmptyLines<L> {
    inner: L,
}

impl<L> NonEmptyLines<L>
where
    L: Iterator<Item = io::Result<String>>,
{
    fn next_line(&mut self) -> io::Result<Option<String>> {
        for line in self.inner.by_ref() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
        Ok(None)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
