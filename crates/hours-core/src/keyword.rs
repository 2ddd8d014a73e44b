//! Structural keywords and line splitting.
//!
//! Every log line is classified by the trimmed token before its first colon:
//! the three structural keywords drive the report machine, anything else
//! (blank lines and the checkpoint marker included) is free-form content.

use std::fmt;

/// The structural keywords recognised at the head of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Date,
    Start,
    Stop,
}

impl Keyword {
    /// Matches a line prefix against the keyword set.
    ///
    /// Returns `None` for anything that is not a keyword; such lines are
    /// content and never fail the parse.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "date" => Some(Self::Date),
            "start" => Some(Self::Start),
            "stop" => Some(Self::Stop),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a line on its first colon into a trimmed prefix and suffix.
///
/// Lines without a colon yield the whole line as prefix and no suffix.
#[must_use]
pub fn split_line(line: &str) -> (&str, Option<&str>) {
    match line.split_once(':') {
        Some((prefix, suffix)) => (prefix.trim(), Some(suffix.trim())),
        None => (line.trim(), None),
    }
}
