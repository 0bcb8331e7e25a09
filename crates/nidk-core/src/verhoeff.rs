//! Verhoeff check-digit validation and generation for 12-digit identity
//! numbers (Aadhaar, APAAR).
//!
//! The Verhoeff algorithm (1969) folds a digit string through the dihedral
//! group D5 and detects all single-digit substitution errors and all adjacent
//! transpositions of unequal digits.  UIDAI uses it for Aadhaar numbers; this
//! system reuses the same scheme for APAAR academic registry IDs.
//!
//! All functions here are total: every input string produces a return value,
//! never a panic.  Malformed input is communicated through `false` or
//! [`VerhoeffError`], so the module embeds safely in both strict validation
//! pipelines and liberal display pipelines.
use std::fmt;

use serde::Serialize;

/// The required length of a full identity number (payload + check digit).
pub const IDENTITY_NUMBER_LEN: usize = 12;

/// The length of a payload awaiting its check digit.
pub const PAYLOAD_LEN: usize = IDENTITY_NUMBER_LEN - 1;

// ---------------------------------------------------------------------------
// Verhoeff constants
//
// These are the published algorithm tables. Any deviation breaks checksum
// compatibility with real-world Aadhaar numbers, so they are reproduced
// verbatim and never derived at runtime.
// ---------------------------------------------------------------------------

/// Multiplication (Cayley) table of the dihedral group D5.
///
/// `D[a][b]` is the group operation applied to `a` and `b`; row 0 is the
/// identity row `[0, 1, ..., 9]`.
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position permutation table, indexed by digit position modulo 8.
///
/// Row 0 is the identity permutation.
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Group inverse of each digit under `D`. Used only by generation.
const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// The reason a string failed Verhoeff verification.
///
/// [`validate`] collapses all variants to `false`; this enum exists for
/// callers that want field-level diagnostics (which digit broke, whether the
/// shape or the checksum was at fault).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerhoeffError {
    /// The input string was empty.
    Empty,
    /// The input was not the required number of characters.
    WrongLength {
        /// The actual character count of the input.
        len: usize,
    },
    /// The input contained a character outside `0`–`9`.
    NonDigit {
        /// The zero-based character index of the first non-digit.
        index: usize,
    },
    /// The shape was correct but the trailing check digit did not match.
    ChecksumMismatch,
}

impl fmt::Display for VerhoeffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("input is empty"),
            Self::WrongLength { len } => {
                write!(f, "expected {IDENTITY_NUMBER_LEN} digits, got {len} characters")
            }
            Self::NonDigit { index } => {
                write!(f, "non-digit character at position {index}")
            }
            Self::ChecksumMismatch => f.write_str("Verhoeff check digit mismatch"),
        }
    }
}

impl std::error::Error for VerhoeffError {}

// ---------------------------------------------------------------------------
// The shared fold
// ---------------------------------------------------------------------------

/// Folds a digit string through the Verhoeff tables and returns the final
/// accumulator.
///
/// Digits are processed least-significant first (the reversed string), so the
/// check digit, when present, is at position 0 of the fold. `offset` shifts
/// the permutation row: 0 when the check digit is part of `digits`
/// (validation), 1 when it is not yet present (generation).
///
/// **Pre-condition:** every byte of `digits` is an ASCII digit. The callers
/// in this module check this before folding.
fn fold(digits: &[u8], offset: usize) -> u8 {
    let mut c: u8 = 0;
    for (i, byte) in digits.iter().rev().enumerate() {
        let v = usize::from(byte - b'0');
        c = D[usize::from(c)][usize::from(P[(i + offset) % 8][v])];
    }
    c
}

// ---------------------------------------------------------------------------
// validate / verify
// ---------------------------------------------------------------------------

/// Returns `true` iff `s` is a structurally valid 12-digit identity number
/// whose trailing Verhoeff check digit is consistent.
///
/// Anything else — empty input, wrong length, non-digit characters, a wrong
/// check digit — yields `false`. Never panics.
///
/// # Examples
///
/// ```
/// use nidk_core::verhoeff::validate;
///
/// // A known-valid Verhoeff-checksummed identity number.
/// assert!(validate("499118665246"));
///
/// // Corrupting any single digit invalidates it.
/// assert!(!validate("499118665247"));
/// assert!(!validate("399118665246"));
///
/// // Shape failures are `false`, not errors.
/// assert!(!validate(""));
/// assert!(!validate("12345678901a"));
/// ```
pub fn validate(s: &str) -> bool {
    verify(s).is_ok()
}

/// Like [`validate`], but reports *why* the input was rejected.
///
/// # Algorithm
///
/// 1. Reject empty input, input whose character count is not exactly 12, and
///    input containing any non-digit character.
/// 2. Fold the reversed digit sequence through the tables:
///    `c = D[c][P[i mod 8][v]]`, starting from `c = 0`.
/// 3. The number is consistent iff the final accumulator is 0.
///
/// The all-zero string is computed honestly through the fold like any other
/// input, never special-cased.
///
/// # Errors
///
/// - [`VerhoeffError::Empty`] — the string has no characters.
/// - [`VerhoeffError::WrongLength`] — character count differs from 12.
/// - [`VerhoeffError::NonDigit`] — a character outside `0`–`9`.
/// - [`VerhoeffError::ChecksumMismatch`] — shape is fine, check digit is not.
pub fn verify(s: &str) -> Result<(), VerhoeffError> {
    if s.is_empty() {
        return Err(VerhoeffError::Empty);
    }
    let len = s.chars().count();
    if len != IDENTITY_NUMBER_LEN {
        return Err(VerhoeffError::WrongLength { len });
    }
    if let Some(index) = s.chars().position(|c| !c.is_ascii_digit()) {
        return Err(VerhoeffError::NonDigit { index });
    }
    // All characters are ASCII digits, so bytes and chars coincide.
    if fold(s.as_bytes(), 0) == 0 {
        Ok(())
    } else {
        Err(VerhoeffError::ChecksumMismatch)
    }
}

// ---------------------------------------------------------------------------
// check_digit / with_check_digit
// ---------------------------------------------------------------------------

/// Computes the Verhoeff check digit for an all-digit payload.
///
/// The fold is the same as in [`verify`] except the permutation row is
/// shifted by one (`P[(i + 1) mod 8]`) because the check digit is not yet
/// part of the sequence, and the result is the group inverse `INV[c]` of the
/// final accumulator rather than the accumulator itself.
///
/// Aadhaar and APAAR payloads are 11 digits; the fold itself is
/// length-generic, so any non-empty all-digit payload is accepted.
///
/// # Errors
///
/// - [`VerhoeffError::Empty`] — the payload has no characters.
/// - [`VerhoeffError::NonDigit`] — a character outside `0`–`9`.
///
/// # Examples
///
/// ```
/// use nidk_core::verhoeff::{check_digit, validate};
///
/// assert_eq!(check_digit("49911866524"), Ok('6'));
/// assert!(validate("499118665246"));
/// ```
pub fn check_digit(payload: &str) -> Result<char, VerhoeffError> {
    if payload.is_empty() {
        return Err(VerhoeffError::Empty);
    }
    if let Some(index) = payload.chars().position(|c| !c.is_ascii_digit()) {
        return Err(VerhoeffError::NonDigit { index });
    }
    let c = fold(payload.as_bytes(), 1);
    Ok(char::from(b'0' + INV[usize::from(c)]))
}

/// Returns `payload` with its computed Verhoeff check digit appended.
///
/// For an 11-digit payload the result is a full 12-digit identity number
/// that passes [`validate`].
///
/// # Errors
///
/// Same as [`check_digit`].
pub fn with_check_digit(payload: &str) -> Result<String, VerhoeffError> {
    let digit = check_digit(payload)?;
    let mut out = String::with_capacity(payload.len() + 1);
    out.push_str(payload);
    out.push(digit);
    Ok(out)
}
