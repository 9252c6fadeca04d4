//! A single transport entry of a bus address.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::config::ParseConfig;
use crate::constants::{KEY_VALUE_SEPARATOR, METHOD_SEPARATOR, PROPERTY_SEPARATOR};
use crate::error::{ParseError, ParseErrorKind};
use crate::escape::escape;
use crate::list::AddressList;

/// One endpoint of a bus address: a transport method and its properties.
///
/// The method is opaque to this crate. Method, keys, and values are stored
/// unescaped as raw bytes, since an escaped token may decode to bytes that
/// are not UTF-8 (a socket path, for instance). The `&str` accessors return
/// `None` for such tokens; the `_bytes` accessors always succeed.
///
/// Properties are kept sorted by key so the serialized form is
/// deterministic. Escaping happens in [`Display`](fmt::Display).
///
/// # Examples
///
/// ```
/// use bus_address::AddressEntry;
///
/// let entry = AddressEntry::new("unix")
///     .with_property("path", "/tmp/dbus-test")
///     .with_property("guid", "1234");
///
/// assert_eq!(entry.method(), Some("unix"));
/// assert_eq!(entry.get("path"), Some("/tmp/dbus-test"));
/// assert_eq!(entry.to_string(), "unix:guid=1234,path=/tmp/dbus-test");
///
/// let raw = AddressEntry::parse("unix:path=/tmp/%FFsock").unwrap();
/// assert_eq!(raw.get("path"), None);
/// assert_eq!(raw.get_bytes(b"path"), Some(&b"/tmp/\xFFsock"[..]));
/// assert_eq!(raw.to_string(), "unix:path=/tmp/%FFsock");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AddressEntry {
    method: Vec<u8>,
    properties: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl AddressEntry {
    /// Creates an entry with the given method and no properties.
    #[must_use]
    pub fn new(method: impl Into<Vec<u8>>) -> Self {
        Self {
            method: method.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Parses a string that holds exactly one address entry.
    ///
    /// Empty segments are not skipped here, so a stray `;` before or after
    /// the entry is an error.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is malformed or does not contain
    /// exactly one entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_address::AddressEntry;
    ///
    /// let entry = AddressEntry::parse("tcp:host=localhost,port=4000").unwrap();
    /// assert_eq!(entry.get("port"), Some("4000"));
    ///
    /// assert!(AddressEntry::parse("unix:path=/a;unix:path=/b").is_err());
    /// assert!(AddressEntry::parse("unix:path=/a;").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let list = AddressList::parse_with_config(input, &ParseConfig::strict())?;
        let found = list.len();
        let mut entries = list.into_iter();
        match (entries.next(), entries.next()) {
            (Some(entry), None) => Ok(entry),
            _ => Err(ParseError::new(
                input,
                ParseErrorKind::UnexpectedEntryCount { found },
            )),
        }
    }

    /// Returns the transport method name, or `None` if it is not UTF-8.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        std::str::from_utf8(&self.method).ok()
    }

    /// Returns the raw transport method name.
    #[must_use]
    pub fn method_bytes(&self) -> &[u8] {
        &self.method
    }

    /// Returns the value of a property.
    ///
    /// `None` if the property is absent or its value is not UTF-8.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_bytes(key.as_bytes())
            .and_then(|value| std::str::from_utf8(value).ok())
    }

    /// Returns the raw value of a property, if present.
    #[must_use]
    pub fn get_bytes(&self, key: &[u8]) -> Option<&[u8]> {
        self.properties.get(key).map(Vec::as_slice)
    }

    /// Returns true if the property is present.
    #[must_use]
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.properties.contains_key(key)
    }

    /// Returns the property map.
    #[must_use]
    pub const fn properties(&self) -> &BTreeMap<Vec<u8>, Vec<u8>> {
        &self.properties
    }

    /// Returns an iterator over the raw properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the entry has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Sets a property, returning the previous value for the key.
    pub fn insert(
        &mut self,
        key: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) -> Option<Vec<u8>> {
        self.properties.insert(key.into(), value.into())
    }

    /// Removes a property, returning its value.
    pub fn remove(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        self.properties.remove(key)
    }

    /// Returns the entry with a property set.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        self.insert(key, value);
        self
    }
}

impl fmt::Display for AddressEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&escape(&self.method))?;
        f.write_char(METHOD_SEPARATOR)?;

        for (i, (key, value)) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_char(PROPERTY_SEPARATOR)?;
            }
            f.write_str(&escape(key))?;
            f.write_char(KEY_VALUE_SEPARATOR)?;
            f.write_str(&escape(value))?;
        }

        Ok(())
    }
}

impl FromStr for AddressEntry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AddressEntry {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl<K, V> Extend<(K, V)> for AddressEntry
where
    K: Into<Vec<u8>>,
    V: Into<Vec<u8>>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AddressEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AddressEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
