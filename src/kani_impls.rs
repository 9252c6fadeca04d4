//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::constants::ESCAPE_MARKER;
use crate::{AddressEntry, AddressList, escape, is_safe_byte, unescape};

/// Bytes drawn for arbitrary tokens: safe bytes, every delimiter, the
/// escape marker itself, and bytes that are not valid UTF-8 on their own.
const TOKEN_BYTES: &[u8] = b"ax9-_/\\.;:,=% \x80\xC3\xFF";

/// Generate a short token that may contain delimiters
fn arbitrary_token(max_len: usize) -> Vec<u8> {
    let len: usize = kani::any();
    let len = len % (max_len + 1);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            TOKEN_BYTES[idx % TOKEN_BYTES.len()]
        })
        .collect()
}

impl kani::Arbitrary for AddressEntry {
    fn any() -> Self {
        let mut entry = AddressEntry::new(arbitrary_token(3));
        let has_property: bool = kani::any();
        if has_property {
            entry.insert(arbitrary_token(2), arbitrary_token(2));
        }
        entry
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Escaped output holds only safe bytes and complete escape triplets
#[kani::proof]
#[kani::unwind(12)]
fn proof_escape_output_is_wellformed() {
    let raw = arbitrary_token(3);
    let escaped = escape(&raw);
    let bytes = escaped.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == ESCAPE_MARKER as u8 {
            assert!(i + 2 < bytes.len());
            assert!(bytes[i + 1].is_ascii_hexdigit());
            assert!(bytes[i + 2].is_ascii_hexdigit());
            i += 3;
        } else {
            assert!(is_safe_byte(bytes[i]));
            i += 1;
        }
    }
}

/// Proof: Unescape reverses escape
#[kani::proof]
#[kani::unwind(12)]
fn proof_escape_roundtrip() {
    let raw = arbitrary_token(3);
    let escaped = escape(&raw);
    assert_eq!(&*unescape(&escaped), raw.as_slice());
}

/// Proof: Serialize then parse yields the same entry
#[kani::proof]
#[kani::unwind(12)]
fn proof_entry_roundtrip() {
    let entry: AddressEntry = kani::any();
    let reparsed = AddressEntry::parse(&entry.to_string()).expect("serialized entry should parse");
    assert_eq!(reparsed, entry);
}

/// Proof: A list of two entries keeps its order through serialization
#[kani::proof]
#[kani::unwind(12)]
fn proof_list_order_preserved() {
    let list = AddressList::from(vec![kani::any::<AddressEntry>(), kani::any::<AddressEntry>()]);
    let reparsed = AddressList::parse(&list.to_string()).expect("serialized list should parse");
    assert_eq!(reparsed, list);
}
