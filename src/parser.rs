//! Splitting of address strings into entries and properties.
//!
//! An address list has three levels of delimiters:
//!
//! ```text
//! address-list := entry (";" entry)*
//! entry        := method ":" properties
//! properties   := "" | prop ("," prop)*
//! prop         := key "=" value
//! ```
//!
//! Each level must split into exactly the expected number of parts. A
//! delimiter that appears inside a method, key, or value has to arrive
//! escaped, otherwise the input is rejected instead of guessed at.

use crate::config::ParseConfig;
use crate::constants::{ENTRY_SEPARATOR, KEY_VALUE_SEPARATOR, METHOD_SEPARATOR, PROPERTY_SEPARATOR};
use crate::entry::AddressEntry;
use crate::error::ParseErrorKind;
use crate::escape::unescape;

/// Parses every entry of an address list.
///
/// Nothing is returned unless all entries parse.
pub(crate) fn parse_entries(
    input: &str,
    config: &ParseConfig,
) -> Result<Vec<AddressEntry>, ParseErrorKind> {
    input
        .split(ENTRY_SEPARATOR)
        .enumerate()
        .filter(|&(index, segment)| {
            let skip = segment.is_empty() && config.skip_empty_entries;
            if skip {
                tracing::trace!(index, "skipping empty address entry");
            }
            !skip
        })
        .map(|(index, segment)| parse_entry(index, segment))
        .collect()
}

/// Parses one `method:properties` segment.
fn parse_entry(index: usize, segment: &str) -> Result<AddressEntry, ParseErrorKind> {
    let (method, properties) =
        split_exact(segment, METHOD_SEPARATOR).map_err(|colons| match colons {
            0 => ParseErrorKind::MissingMethodSeparator {
                index,
                entry: segment.to_string(),
            },
            colons => ParseErrorKind::AmbiguousMethodSeparator {
                index,
                entry: segment.to_string(),
                colons,
            },
        })?;

    let mut entry = AddressEntry::new(unescape(method).into_owned());

    if !properties.is_empty() {
        for property in properties.split(PROPERTY_SEPARATOR) {
            let (key, value) =
                split_exact(property, KEY_VALUE_SEPARATOR).map_err(|equals| match equals {
                    0 => ParseErrorKind::MissingPropertyEquals {
                        index,
                        property: property.to_string(),
                    },
                    equals => ParseErrorKind::AmbiguousPropertyEquals {
                        index,
                        property: property.to_string(),
                        equals,
                    },
                })?;

            entry.insert(unescape(key).into_owned(), unescape(value).into_owned());
        }
    }

    tracing::trace!(
        index,
        method,
        properties = entry.len(),
        "parsed address entry"
    );

    Ok(entry)
}

/// Splits on a separator that must occur exactly once.
///
/// On failure returns how many times the separator occurred.
fn split_exact(input: &str, separator: char) -> Result<(&str, &str), usize> {
    match input.split_once(separator) {
        Some((head, tail)) if !tail.contains(separator) => Ok((head, tail)),
        Some(_) => Err(input.matches(separator).count()),
        None => Err(0),
    }
}
