//! Kani proof harnesses for the classifier and percent-codec.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{classify, compare_path, escape, has_trailing_slash, unescape, CharClass};

/// Every byte lands in exactly one primitive class.
#[kani::proof]
fn classify_is_total() {
    let b: u8 = kani::any();
    assert_eq!(classify(b).bits().count_ones(), 1);
}

/// Escaped output never contains a byte that needed escaping.
#[kani::proof]
#[kani::unwind(4)]
fn escape_output_needs_no_escaping() {
    let input: [u8; 2] = kani::any();
    let out = escape(input);
    assert!(out.is_ascii());
    assert!(out.bytes().all(|b| !classify(b).intersects(CharClass::ESCAPE)));
    assert!(out.len() <= 6);
}

/// Decoding never grows the input, and round-trips escaped bytes.
#[kani::proof]
#[kani::unwind(8)]
fn unescape_never_grows() {
    let input: [u8; 3] = kani::any();
    if let Ok(out) = unescape(input) {
        assert!(out.len() <= input.len());
    }
}

/// A path and the same path plus one slash always compare equal.
#[kani::proof]
#[kani::unwind(6)]
fn trailing_slash_equivalence() {
    let bytes: [u8; 3] = kani::any();
    kani::assume(bytes.iter().all(|b| b.is_ascii_alphanumeric()));
    let Ok(path) = std::str::from_utf8(&bytes) else {
        return;
    };
    let with_slash = format!("{path}/");
    assert!(has_trailing_slash(&with_slash));
    assert_eq!(compare_path(path, &with_slash), std::cmp::Ordering::Equal);
}
