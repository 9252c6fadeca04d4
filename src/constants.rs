//! Constants for bus address parsing and well-known addresses.

/// Separates alternative address entries in an address list.
pub const ENTRY_SEPARATOR: char = ';';

/// Separates the transport method from its properties.
pub const METHOD_SEPARATOR: char = ':';

/// Separates properties within an entry.
pub const PROPERTY_SEPARATOR: char = ',';

/// Separates a property key from its value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Marker that introduces a two-digit hex escape.
///
/// Informational: escaping goes through `percent-encoding`, which always
/// uses `%`. Useful when scanning escaped text by hand.
pub const ESCAPE_MARKER: char = '%';

/// Address used for the system bus when the environment does not override it.
pub const DEFAULT_SYSTEM_BUS_ADDRESS: &str = "unix:path=/var/run/dbus/system_bus_socket";

/// Environment variable overriding the system bus address.
pub const SYSTEM_BUS_ADDRESS_ENV: &str = "DBUS_SYSTEM_BUS_ADDRESS";

/// Environment variable holding the session bus address.
pub const SESSION_BUS_ADDRESS_ENV: &str = "DBUS_SESSION_BUS_ADDRESS";

/// Environment variable holding the address of the bus that started this process.
pub const STARTER_ADDRESS_ENV: &str = "DBUS_STARTER_ADDRESS";

/// Environment variable naming the type of the bus that started this process.
pub const STARTER_BUS_TYPE_ENV: &str = "DBUS_STARTER_BUS_TYPE";
