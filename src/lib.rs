//! Parser and serializer for message bus address strings.
//!
//! A bus address lists one or more alternative endpoints for reaching a
//! message bus. Each endpoint names a transport method and carries
//! key/value properties:
//!
//! ```text
//! unix:path=/var/run/dbus/system_bus_socket;tcp:host=localhost,port=4000
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use bus_address::{AddressEntry, AddressList};
//!
//! // Parse an address list
//! let list = AddressList::parse("unix:path=/tmp/dbus-a;tcp:host=localhost,port=4000").unwrap();
//! assert_eq!(list.len(), 2);
//! assert_eq!(list[0].get("path"), Some("/tmp/dbus-a"));
//!
//! // Compose and serialize an entry
//! let entry = AddressEntry::new("unix").with_property("path", "/tmp/with space");
//! assert_eq!(entry.to_string(), "unix:path=/tmp/with%20space");
//! ```
//!
//! # Grammar
//!
//! ```text
//! address-list     := entry (";" entry)*
//! entry            := method ":" properties
//! properties       := "" | prop ("," prop)*
//! prop             := key "=" value
//! method,key,value := escaped-text
//! ```
//!
//! Only ASCII letters, digits, `-`, `_`, `/`, `\` and `.` appear literally.
//! Every other byte is written as `%XX`. A delimiter that appears unescaped
//! where it is not expected makes the whole address invalid; parsing never
//! guesses how to split such input.
//!
//! Unescaped tokens are byte strings and need not be UTF-8. The `&str`
//! accessors such as [`AddressEntry::get`] return `None` for such tokens,
//! while [`AddressEntry::get_bytes`] always returns the raw value.
//!
//! # Empty entries
//!
//! By default empty entries (an empty string, a trailing `;`, or `;;`) are
//! skipped, so an empty list serializes to `""` and parses back to an empty
//! list. Use [`ParseConfig::strict`] to reject them.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod constants;
mod entry;
pub mod env;
mod error;
mod escape;
#[cfg(kani)]
mod kani_impls;
mod list;
mod parser;
pub mod prelude;

pub use config::ParseConfig;
pub use constants::{
    DEFAULT_SYSTEM_BUS_ADDRESS, ENTRY_SEPARATOR, ESCAPE_MARKER, KEY_VALUE_SEPARATOR,
    METHOD_SEPARATOR, PROPERTY_SEPARATOR, SESSION_BUS_ADDRESS_ENV, STARTER_ADDRESS_ENV,
    STARTER_BUS_TYPE_ENV, SYSTEM_BUS_ADDRESS_ENV,
};
pub use entry::AddressEntry;
pub use error::{ParseError, ParseErrorKind};
pub use escape::{ESCAPE_SET, escape, is_safe_byte, unescape};
pub use list::{AddressList, parse};
