// Copyright (c) 2023 The Solsnap Contributors

//! Derivation path validation
//!
//! Callers supply path segments as text of the form `<digits>'`, these are
//! appended to the fixed [`BASE_PATH`][crate::engine::BASE_PATH] before
//! derivation. Only canonical hardened indices are accepted.

use std::fmt::Write;

use crate::{engine::Error, slip10::HARDENED};

/// Hardened segment marker
pub const HARDENED_MARKER: char = '\'';

/// Validate a sequence of path segments, returning the (unhardened) child
/// indices in order.
pub fn validate_path<S: AsRef<str>>(segments: &[S]) -> Result<Vec<u32>, Error> {
    if segments.is_empty() {
        return Err(Error::EmptyPath);
    }

    segments.iter().map(|s| parse_segment(s.as_ref())).collect()
}

/// Parse a single hardened path segment
pub fn parse_segment(s: &str) -> Result<u32, Error> {
    let invalid = || Error::InvalidPathSegment(s.to_string());

    // Strip hardened marker
    let digits = s.strip_suffix(HARDENED_MARKER).ok_or_else(invalid)?;

    // Digits only (no sign, whitespace, or hex prefix)
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let index: u32 = digits.parse().map_err(|_| invalid())?;

    // Canonical form check, rejects leading zeros
    if index.to_string() != digits {
        return Err(invalid());
    }

    // Index must leave room for the hardened bit
    if index >= HARDENED {
        return Err(invalid());
    }

    Ok(index)
}

/// Format a full derivation path for display, eg. `m/44'/501'/0'/0'`
pub fn format_path(path: &[u32]) -> String {
    let mut s = String::from("m");
    for i in path {
        let _ = write!(s, "/{}{}", i & !HARDENED, HARDENED_MARKER);
    }
    s
}
