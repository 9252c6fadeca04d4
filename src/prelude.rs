//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use bus_address::prelude::*;
//!
//! let list = AddressList::parse("unix:path=/tmp/dbus-test").unwrap();
//! assert_eq!(list[0].method(), Some("unix"));
//! ```
//!
//! The well-known address lookups in [`env`](crate::env) are left out since
//! they read process state.

pub use crate::{
    // Core types
    AddressEntry, AddressList, ParseConfig,
    // Errors
    ParseError, ParseErrorKind,
    // Functions
    escape, parse, unescape,
};
