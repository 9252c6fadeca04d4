//! Escaping of method names, property keys, and property values.
//!
//! Bus addresses allow a small set of bytes to appear literally. Every other
//! byte is written as `%XX`. Unescaping is lenient: a `%` that does not start
//! a valid two-digit hex sequence is kept as-is.
//!
//! Tokens are byte strings. A socket path may hold bytes that are not UTF-8,
//! so decoding never goes through `str` and never replaces anything.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode};

/// Bytes that must be escaped: everything except ASCII letters, digits,
/// `-`, `_`, `/`, `\` and `.`.
///
/// Non-ASCII bytes are always escaped.
pub const ESCAPE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'/')
    .remove(b'\\')
    .remove(b'.');

/// Returns true if the byte may appear unescaped in an address.
#[must_use]
pub const fn is_safe_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'/' | b'\\' | b'.')
}

/// Escapes a raw token for use as a method, key, or value.
///
/// Accepts text or arbitrary bytes. Each unsafe byte becomes one uppercase
/// `%XX` triplet. Borrows the input when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use bus_address::escape;
///
/// assert_eq!(escape("/tmp/dbus-test"), "/tmp/dbus-test");
/// assert_eq!(escape("a=b"), "a%3Db");
/// assert_eq!(escape("é"), "%C3%A9");
/// assert_eq!(escape(b"/tmp/\xFFsock"), "/tmp/%FFsock");
/// ```
#[must_use]
pub fn escape<T: AsRef<[u8]> + ?Sized>(raw: &T) -> Cow<'_, str> {
    percent_encode(raw.as_ref(), ESCAPE_SET).into()
}

/// Reverses [`escape`], yielding the raw bytes.
///
/// Hex digits may be either case. Malformed escapes such as a trailing `%`
/// or `%G1` are copied through unchanged. The result is not required to be
/// UTF-8.
///
/// # Examples
///
/// ```
/// use bus_address::unescape;
///
/// assert_eq!(&*unescape("a%3Db"), b"a=b");
/// assert_eq!(&*unescape("a%3db"), b"a=b");
/// assert_eq!(&*unescape("100%"), b"100%");
/// assert_eq!(&*unescape("%FF"), b"\xFF");
/// ```
#[must_use]
pub fn unescape(escaped: &str) -> Cow<'_, [u8]> {
    percent_decode_str(escaped).into()
}
