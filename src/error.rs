//! Error types for bus address parsing.

use std::fmt;

/// Errors that can occur when parsing a bus address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
///
/// Every grammar failure names the separator that was expected and whether
/// it was absent or repeated, together with the raw text that broke it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No address string was supplied
    NullInput,
    /// Entry has no ':' between method and properties
    MissingMethodSeparator {
        /// Zero-based position of the entry among the `;`-separated segments
        index: usize,
        /// The raw entry text
        entry: String,
    },
    /// Entry has more than one unescaped ':'
    AmbiguousMethodSeparator {
        /// Zero-based position of the entry among the `;`-separated segments
        index: usize,
        /// The raw entry text
        entry: String,
        /// Number of colons found
        colons: usize,
    },
    /// Property has no '=' between key and value
    MissingPropertyEquals {
        /// Zero-based position of the owning entry among the `;`-separated segments
        index: usize,
        /// The raw property text
        property: String,
    },
    /// Property has more than one unescaped '='
    AmbiguousPropertyEquals {
        /// Zero-based position of the owning entry among the `;`-separated segments
        index: usize,
        /// The raw property text
        property: String,
        /// Number of equals signs found
        equals: usize,
    },
    /// A single entry was expected but the input held a different number
    UnexpectedEntryCount {
        /// Number of entries found
        found: usize,
    },
}

impl ParseError {
    pub(crate) fn new(input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// Creates a `NullInput` error.
    #[must_use]
    pub fn null_input() -> Self {
        Self::new(String::new(), ParseErrorKind::NullInput)
    }

    /// Returns true if no input was supplied.
    #[must_use]
    pub const fn is_null_input(&self) -> bool {
        matches!(self.kind, ParseErrorKind::NullInput)
    }

    /// Returns true if the error concerns the ':' method separator.
    #[must_use]
    pub const fn is_method_separator(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::MissingMethodSeparator { .. }
                | ParseErrorKind::AmbiguousMethodSeparator { .. }
        )
    }

    /// Returns true if the error concerns the '=' property separator.
    #[must_use]
    pub const fn is_property_equals(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::MissingPropertyEquals { .. }
                | ParseErrorKind::AmbiguousPropertyEquals { .. }
        )
    }

    /// Returns the index of the offending entry, if the error is tied to one.
    #[must_use]
    pub const fn entry_index(&self) -> Option<usize> {
        match &self.kind {
            ParseErrorKind::MissingMethodSeparator { index, .. }
            | ParseErrorKind::AmbiguousMethodSeparator { index, .. }
            | ParseErrorKind::MissingPropertyEquals { index, .. }
            | ParseErrorKind::AmbiguousPropertyEquals { index, .. } => Some(*index),
            ParseErrorKind::NullInput | ParseErrorKind::UnexpectedEntryCount { .. } => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if matches!(self.kind, ParseErrorKind::NullInput) {
            return write!(f, "failed to parse bus address: {}", self.kind);
        }
        write!(f, "failed to parse bus address '{}': {}", self.input, self.kind)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullInput => write!(f, "no address string was supplied"),
            Self::MissingMethodSeparator { index, entry } => {
                write!(
                    f,
                    "entry {index} '{entry}' has no ':' separating method from properties"
                )
            }
            Self::AmbiguousMethodSeparator {
                index,
                entry,
                colons,
            } => {
                write!(
                    f,
                    "entry {index} '{entry}' has {colons} ':' separators, expected one; escape literal colons as %3A"
                )
            }
            Self::MissingPropertyEquals { index, property } => {
                write!(
                    f,
                    "property '{property}' in entry {index} has no '=' separating key from value"
                )
            }
            Self::AmbiguousPropertyEquals {
                index,
                property,
                equals,
            } => {
                write!(
                    f,
                    "property '{property}' in entry {index} has {equals} '=' separators, expected one; escape literal equals signs as %3D"
                )
            }
            Self::UnexpectedEntryCount { found } => {
                write!(f, "expected exactly one address entry, found {found}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
