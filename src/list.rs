//! Ordered list of address entries.

use std::fmt::{self, Write as _};
use std::ops::Deref;
use std::str::FromStr;

use crate::config::ParseConfig;
use crate::constants::ENTRY_SEPARATOR;
use crate::entry::AddressEntry;
use crate::error::ParseError;
use crate::parser;

/// A parsed bus address: alternative endpoints in priority order.
///
/// Callers try entry 0 first, then entry 1, and so on. The order is kept
/// exactly as written.
///
/// # Examples
///
/// ```
/// use bus_address::AddressList;
///
/// let list = AddressList::parse("unix:path=/tmp/a;tcp:host=localhost,port=4000").unwrap();
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[0].method(), Some("unix"));
/// assert_eq!(list[1].get("port"), Some("4000"));
/// assert_eq!(list.to_string(), "unix:path=/tmp/a;tcp:host=localhost,port=4000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AddressList {
    entries: Vec<AddressEntry>,
}

impl AddressList {
    /// Creates an empty address list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an address list with the default configuration.
    ///
    /// Empty entries, such as one left by a trailing `;`, are skipped.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if any entry lacks or repeats the `:` separator,
    /// or any property lacks or repeats the `=` separator. No entries are
    /// returned when an error occurs.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with_config(input, &ParseConfig::default())
    }

    /// Parses an address list that may be absent.
    ///
    /// # Errors
    ///
    /// Returns a `NullInput` error for `None`, otherwise as [`parse`](Self::parse).
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_address::AddressList;
    ///
    /// let err = AddressList::parse_optional(None).unwrap_err();
    /// assert!(err.is_null_input());
    /// ```
    pub fn parse_optional(input: Option<&str>) -> Result<Self, ParseError> {
        match input {
            Some(input) => Self::parse(input),
            None => {
                tracing::debug!("no bus address supplied");
                Err(ParseError::null_input())
            }
        }
    }

    /// Parses an address list with an explicit configuration.
    ///
    /// # Errors
    ///
    /// As [`parse`](Self::parse). With `skip_empty_entries` disabled an empty
    /// entry is also an error.
    pub fn parse_with_config(input: &str, config: &ParseConfig) -> Result<Self, ParseError> {
        match parser::parse_entries(input, config) {
            Ok(entries) => {
                tracing::debug!(entries = entries.len(), "parsed bus address");
                Ok(Self { entries })
            }
            Err(kind) => {
                tracing::debug!(error = %kind, "rejected bus address");
                Err(ParseError::new(input, kind))
            }
        }
    }

    /// Returns the entries in priority order.
    #[must_use]
    pub fn entries(&self) -> &[AddressEntry] {
        &self.entries
    }

    /// Appends an entry with the lowest priority.
    pub fn push(&mut self, entry: AddressEntry) {
        self.entries.push(entry);
    }

    /// Returns the first entry using the given method.
    #[must_use]
    pub fn find_method(&self, method: &str) -> Option<&AddressEntry> {
        self.entries
            .iter()
            .find(|entry| entry.method_bytes() == method.as_bytes())
    }

    /// Consumes the list, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<AddressEntry> {
        self.entries
    }
}

impl Deref for AddressList {
    type Target = [AddressEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl fmt::Display for AddressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_char(ENTRY_SEPARATOR)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl FromStr for AddressList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AddressList {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Vec<AddressEntry>> for AddressList {
    fn from(entries: Vec<AddressEntry>) -> Self {
        Self { entries }
    }
}

impl From<AddressEntry> for AddressList {
    fn from(entry: AddressEntry) -> Self {
        Self {
            entries: vec![entry],
        }
    }
}

impl FromIterator<AddressEntry> for AddressList {
    fn from_iter<I: IntoIterator<Item = AddressEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AddressList {
    type Item = AddressEntry;
    type IntoIter = std::vec::IntoIter<AddressEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressList {
    type Item = &'a AddressEntry;
    type IntoIter = std::slice::Iter<'a, AddressEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AddressList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AddressList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parses an address list with the default configuration.
///
/// Shorthand for [`AddressList::parse`].
///
/// # Errors
///
/// Returns `ParseError` if the address is malformed.
pub fn parse(input: &str) -> Result<AddressList, ParseError> {
    AddressList::parse(input)
}
