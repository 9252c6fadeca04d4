//! Property-based tests validating the parser against the address grammar.
//!
//! These tests generate random entries and address strings and check that
//! serialization and parsing agree, and that unescaped delimiters in the
//! wrong place are always rejected.

use proptest::prelude::*;

use bus_address::{
    AddressEntry, AddressList, ESCAPE_MARKER, ParseConfig, ParseErrorKind, escape, is_safe_byte,
    unescape,
};

/// Strategies for generating grammar inputs.
mod strategies {
    use super::*;

    /// Characters allowed unescaped
    const SAFE_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_/\\.";

    /// Generate text made only of safe characters (may be empty)
    pub fn safe_text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(SAFE_CHARS.to_vec()), 0..=24)
            .prop_map(|chars| chars.into_iter().map(char::from).collect())
    }

    /// Generate non-empty safe text
    pub fn safe_token() -> impl Strategy<Value = String> {
        safe_text().prop_filter("token must be non-empty", |s| !s.is_empty())
    }

    /// Generate arbitrary Unicode text, biased towards delimiters
    pub fn any_text() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => any::<String>(),
            2 => "[;:,=% a-z\\x00é日]{0,12}",
            1 => safe_text(),
        ]
    }

    /// Generate arbitrary bytes, which need not be UTF-8
    pub fn any_bytes() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>(), 0..=12)
    }

    /// Generate a raw token, either text or arbitrary bytes
    pub fn any_token() -> impl Strategy<Value = Vec<u8>> {
        prop_oneof![
            2 => any_text().prop_map(String::into_bytes),
            1 => any_bytes(),
        ]
    }

    /// Generate the escaped form of arbitrary bytes
    ///
    /// Every byte is written as `%XX` with hex digits of either case, so the
    /// text is not the canonical serialization.
    pub fn escaped_bytes() -> impl Strategy<Value = (Vec<u8>, String)> {
        prop::collection::vec((any::<u8>(), any::<bool>()), 0..=12).prop_map(|pairs| {
            let raw = pairs.iter().map(|&(b, _)| b).collect();
            let escaped = pairs
                .iter()
                .map(|&(b, lower)| {
                    if lower {
                        format!("%{b:02x}")
                    } else {
                        format!("%{b:02X}")
                    }
                })
                .collect();
            (raw, escaped)
        })
    }

    /// Generate an entry with arbitrary method, keys and values
    pub fn entry() -> impl Strategy<Value = AddressEntry> {
        (
            any_token(),
            prop::collection::btree_map(any_token(), any_token(), 0..=4),
        )
            .prop_map(|(method, properties)| {
                let mut entry = AddressEntry::new(method);
                entry.extend(properties);
                entry
            })
    }

    /// Generate a well-formed entry written only with safe characters
    pub fn safe_entry_str() -> impl Strategy<Value = String> {
        (
            safe_token(),
            prop::collection::vec((safe_token(), safe_text()), 0..=4),
        )
            .prop_map(|(method, props)| {
                let props: Vec<String> = props.into_iter().map(|(k, v)| format!("{k}={v}")).collect();
                format!("{method}:{}", props.join(","))
            })
    }
}

mod escape_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn escape_roundtrips(s in any_text()) {
            let escaped = escape(&s);
            let decoded = unescape(&escaped);
            prop_assert_eq!(&*decoded, s.as_bytes());
        }

        #[test]
        fn escape_roundtrips_bytes(raw in any_bytes()) {
            let escaped = escape(&raw);
            let decoded = unescape(&escaped);
            prop_assert_eq!(&*decoded, raw.as_slice());
        }

        #[test]
        fn escaped_bytes_decode_exactly((raw, escaped) in escaped_bytes()) {
            let decoded = unescape(&escaped);
            prop_assert_eq!(&*decoded, raw.as_slice());
        }

        #[test]
        fn escape_output_is_wellformed(s in any_text()) {
            let escaped = escape(&s);
            let bytes = escaped.as_bytes();
            let mut i = 0;
            while i < bytes.len() {
                if bytes[i] == ESCAPE_MARKER as u8 {
                    prop_assert!(i + 2 < bytes.len(), "truncated escape in {}", escaped);
                    prop_assert!(bytes[i + 1].is_ascii_hexdigit());
                    prop_assert!(bytes[i + 2].is_ascii_hexdigit());
                    i += 3;
                } else {
                    prop_assert!(is_safe_byte(bytes[i]), "unsafe byte in {}", escaped);
                    i += 1;
                }
            }
        }

        #[test]
        fn escape_output_has_no_delimiters(s in any_text()) {
            let escaped = escape(&s);
            prop_assert!(!escaped.contains([';', ':', ',', '=']));
        }

        #[test]
        fn safe_text_is_unchanged(s in safe_text()) {
            let escaped = escape(&s);
            let decoded = unescape(&s);
            prop_assert_eq!(&*escaped, s.as_str());
            prop_assert_eq!(&*decoded, s.as_bytes());
        }

        #[test]
        fn unescape_never_panics(s in any::<String>()) {
            let _ = unescape(&s);
        }
    }
}

mod entry_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn entry_roundtrip(entry in entry()) {
            let serialized = entry.to_string();
            let list = AddressList::parse(&serialized).unwrap();
            prop_assert_eq!(list.len(), 1);
            prop_assert_eq!(&list[0], &entry);
        }

        #[test]
        fn serialized_entry_has_one_colon(entry in entry()) {
            let serialized = entry.to_string();
            prop_assert_eq!(serialized.matches(':').count(), 1);
            prop_assert!(!serialized.contains(';'));
        }

        #[test]
        fn escaped_byte_values_survive_reserialization(
            (raw_key, key) in escaped_bytes(),
            (raw_value, value) in escaped_bytes(),
        ) {
            let input = format!("unix:{key}={value}");
            let entry = AddressEntry::parse(&input).unwrap();
            prop_assert_eq!(entry.get_bytes(&raw_key), Some(raw_value.as_slice()));

            let reparsed = AddressEntry::parse(&entry.to_string()).unwrap();
            prop_assert_eq!(reparsed.get_bytes(&raw_key), Some(raw_value.as_slice()));
            prop_assert_eq!(reparsed, entry);
        }

        #[test]
        fn canonical_escaped_bytes_reserialize_exactly(raw in any_bytes()) {
            let input = format!("unix:path={}", escape(&raw));
            let entry = AddressEntry::parse(&input).unwrap();
            prop_assert_eq!(entry.to_string(), input);
        }

        #[test]
        fn safe_entries_parse_and_reserialize(s in safe_entry_str()) {
            let entry = AddressEntry::parse(&s).unwrap();
            let reparsed = AddressEntry::parse(&entry.to_string()).unwrap();
            prop_assert_eq!(reparsed, entry);
        }
    }
}

mod list_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn list_roundtrip_preserves_order(entries in prop::collection::vec(entry(), 0..=5)) {
            let list = AddressList::from(entries.clone());
            let reparsed = AddressList::parse(&list.to_string()).unwrap();
            prop_assert_eq!(reparsed.entries(), entries.as_slice());
        }

        #[test]
        fn extra_colon_is_rejected(method in safe_token(), a in safe_text(), b in safe_text()) {
            let input = format!("{method}:k={a}:{b}");
            let err = AddressList::parse(&input).unwrap_err();
            let is_ambiguous = matches!(err.kind, ParseErrorKind::AmbiguousMethodSeparator { colons: 2, .. });
            prop_assert!(is_ambiguous);
        }

        #[test]
        fn extra_equals_is_rejected(method in safe_token(), a in safe_text(), b in safe_text()) {
            let input = format!("{method}:k={a}={b}");
            let err = AddressList::parse(&input).unwrap_err();
            let is_ambiguous = matches!(err.kind, ParseErrorKind::AmbiguousPropertyEquals { equals: 2, .. });
            prop_assert!(is_ambiguous);
        }

        #[test]
        fn missing_colon_is_rejected(s in safe_token()) {
            let err = AddressList::parse(&s).unwrap_err();
            let is_missing = matches!(err.kind, ParseErrorKind::MissingMethodSeparator { .. });
            prop_assert!(is_missing);
        }

        #[test]
        fn failure_returns_no_entries(good in safe_entry_str(), bad in safe_token()) {
            let input = format!("{good};{bad}");
            let err = AddressList::parse(&input).unwrap_err();
            prop_assert_eq!(err.entry_index(), Some(1));
            prop_assert_eq!(err.input, input);
        }
    }
}

mod fixed_cases {
    use super::*;

    #[test]
    fn two_unix_entries_in_order() {
        let list = AddressList::parse("unix:path=/tmp/a;unix:path=/tmp/b").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].method(), Some("unix"));
        assert_eq!(list[0].get("path"), Some("/tmp/a"));
        assert_eq!(list[1].method(), Some("unix"));
        assert_eq!(list[1].get("path"), Some("/tmp/b"));
    }

    #[test]
    fn missing_separators() {
        let err = AddressList::parse("unixpath=/tmp/a").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::MissingMethodSeparator { .. }));

        let err = AddressList::parse("unix:path").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::MissingPropertyEquals { .. }));
    }

    #[test]
    fn ambiguous_separators() {
        let err = AddressList::parse("unix:path=/tmp:foo").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::AmbiguousMethodSeparator { .. }));

        let err = AddressList::parse("unix:path=a=b").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::AmbiguousPropertyEquals { .. }));
    }

    #[test]
    fn lone_comma_is_missing_equals() {
        let err = AddressList::parse("unix:,").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MissingPropertyEquals {
                index: 0,
                property: String::new(),
            }
        );
    }

    #[test]
    fn non_utf8_path_reserializes_exactly() {
        let input = "unix:path=/tmp/%FFsock";
        let entry = AddressEntry::parse(input).unwrap();
        assert_eq!(entry.get("path"), None);
        assert_eq!(entry.get_bytes(b"path"), Some(&b"/tmp/\xFFsock"[..]));
        assert_eq!(entry.to_string(), input);
        assert_eq!(AddressList::parse(input).unwrap().to_string(), input);
    }

    #[test]
    fn single_entry_rejects_stray_separators() {
        for input in ["", ";unix:a=b", "unix:a=b;"] {
            let err = AddressEntry::parse(input).unwrap_err();
            assert!(err.is_method_separator(), "{input}");
        }
    }

    #[test]
    fn delimiter_value_roundtrips() {
        let entry = AddressEntry::new("unix").with_property("path", "a;b:c=d,e");
        let list = AddressList::parse(&entry.to_string()).unwrap();
        assert_eq!(list[0].get("path"), Some("a;b:c=d,e"));
    }

    #[test]
    fn absent_input_is_null_input() {
        let err = AddressList::parse_optional(None).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NullInput);
    }

    #[test]
    fn trailing_semicolon_policy() {
        let list = AddressList::parse("unix:path=/tmp/a;").unwrap();
        assert_eq!(list.len(), 1);

        let err = AddressList::parse_with_config("unix:path=/tmp/a;", &ParseConfig::strict())
            .unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::MissingMethodSeparator { index: 1, .. }
        ));
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let entry = AddressEntry::parse("tcp:port=1,port=2").unwrap();
        assert_eq!(entry.get("port"), Some("2"));
    }
}
