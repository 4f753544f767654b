//! Error type for the matching boundary.
//!
//! The core pipeline is infallible; these errors only arise from the
//! optional pre-flight validation of caller-supplied birth data.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejections raised before a match computation is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    /// Calendar date field out of range.
    InvalidDate(&'static str),
    /// Time-of-day or timezone field out of range.
    InvalidTime(&'static str),
    /// Coordinates missing or outside valid ranges.
    UnresolvedPlace(&'static str),
}

impl Display for MatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidTime(msg) => write!(f, "invalid time: {msg}"),
            Self::UnresolvedPlace(msg) => write!(f, "unresolved place: {msg}"),
        }
    }
}

impl Error for MatchError {}
