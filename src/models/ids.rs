//! Strongly-typed identifier for expense entries
//!
//! Entries are addressed by an identifier the ledger hands out at creation,
//! never by their position, so deleting one row cannot redirect an edit to
//! its neighbour.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DISPLAY_PREFIX: &str = "exp-";

/// Identifier of an expense entry within one ledger
///
/// Values increase monotonically in creation order and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// Create an ID from its raw sequence number
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The ID that follows this one
    pub(crate) const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.0)
    }
}

impl FromStr for EntryId {
    type Err = EntryIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Accept both "exp-3" and a bare "3"
        let digits = trimmed.strip_prefix(DISPLAY_PREFIX).unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| EntryIdParseError(trimmed.to_string()))
    }
}

/// Error returned when text does not name an expense entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid expense id: {0} (expected e.g. exp-3)")]
pub struct EntryIdParseError(pub String);
