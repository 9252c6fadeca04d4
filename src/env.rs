//! Well-known bus addresses from the process environment.
//!
//! These functions only read variables. The returned strings are handed to
//! [`AddressList::parse`](crate::AddressList::parse) or
//! [`AddressList::parse_optional`](crate::AddressList::parse_optional) by the
//! caller.
//!
//! ```no_run
//! use bus_address::{env, AddressList};
//!
//! let session = AddressList::parse_optional(env::session_bus_address().as_deref());
//! let system = AddressList::parse(&env::system_bus_address());
//! ```

use std::env::{self, VarError};

use crate::constants::{
    DEFAULT_SYSTEM_BUS_ADDRESS, SESSION_BUS_ADDRESS_ENV, STARTER_ADDRESS_ENV,
    STARTER_BUS_TYPE_ENV, SYSTEM_BUS_ADDRESS_ENV,
};

/// Returns the system bus address.
///
/// Uses `DBUS_SYSTEM_BUS_ADDRESS` when set and non-empty, otherwise
/// [`DEFAULT_SYSTEM_BUS_ADDRESS`].
#[must_use]
pub fn system_bus_address() -> String {
    system_bus_address_from(lookup(SYSTEM_BUS_ADDRESS_ENV))
}

/// Returns the session bus address from `DBUS_SESSION_BUS_ADDRESS`.
#[must_use]
pub fn session_bus_address() -> Option<String> {
    lookup(SESSION_BUS_ADDRESS_ENV)
}

/// Returns the starter bus address from `DBUS_STARTER_ADDRESS`.
#[must_use]
pub fn starter_address() -> Option<String> {
    lookup(STARTER_ADDRESS_ENV)
}

/// Returns the starter bus type from `DBUS_STARTER_BUS_TYPE`.
#[must_use]
pub fn starter_bus_type() -> Option<String> {
    lookup(STARTER_BUS_TYPE_ENV)
}

fn system_bus_address_from(value: Option<String>) -> String {
    match value {
        Some(addr) if !addr.is_empty() => addr,
        _ => {
            tracing::debug!(
                address = DEFAULT_SYSTEM_BUS_ADDRESS,
                "using default system bus address"
            );
            DEFAULT_SYSTEM_BUS_ADDRESS.to_string()
        }
    }
}

fn lookup(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            tracing::debug!(variable = name, "ignoring non-unicode bus address variable");
            None
        }
    }
}
