//! Identity-number kinds and their shape rules.
//!
//! The admissions flow validates two distinct form fields with the same
//! check-digit scheme: the Aadhaar national ID and the APAAR academic
//! registry ID. Each kind carries a shape regex that gates the input before
//! the Verhoeff fold runs, plus the field-level error message callers
//! surface on rejection.
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::verhoeff::{self, VerhoeffError};

// ---------------------------------------------------------------------------
// Compiled regex patterns
//
// Static to avoid recompiling per call. The pattern literals are always
// valid; the fallback chain exists only because the workspace bans unwrap()
// and expect().
// ---------------------------------------------------------------------------

/// Shape of a full identity number: exactly 12 ASCII digits.
static TWELVE_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{12}$")
        .unwrap_or_else(|_| Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken")))
});

// ---------------------------------------------------------------------------
// IdKind
// ---------------------------------------------------------------------------

/// The kind of identity number being validated.
///
/// Both kinds are 12-digit Verhoeff-checksummed numbers today; the shape
/// regex is kept per-kind so a kind with a different shape slots in without
/// touching callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    /// Aadhaar — 12-digit Indian national identity number (UIDAI).
    Aadhaar,
    /// APAAR — Automated Permanent Academic Account Registry ID, validated
    /// with the same Verhoeff scheme.
    Apaar,
}

impl IdKind {
    /// Human-readable kind name used in field-level error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Aadhaar => "Aadhaar",
            Self::Apaar => "APAAR",
        }
    }

    /// The shape regex an input must match before the check-digit fold runs.
    fn shape_re(self) -> &'static Regex {
        match self {
            Self::Aadhaar | Self::Apaar => &TWELVE_DIGITS_RE,
        }
    }

    /// Returns `true` iff `value` matches this kind's shape and passes the
    /// Verhoeff check. Total; never panics.
    pub fn is_valid(self, value: &str) -> bool {
        // The shape gate rejects cheaply; validate re-checks length
        // defensively before folding.
        self.shape_re().is_match(value) && verhoeff::validate(value)
    }

    /// Like [`IdKind::is_valid`], but reports the rejection reason.
    ///
    /// # Errors
    ///
    /// The same variants as [`verhoeff::verify`], which diagnoses every way
    /// an input can miss this kind's 12-digit shape.
    pub fn verify(self, value: &str) -> Result<(), VerhoeffError> {
        // Both kinds share the 12-digit shape, so the shared verify covers
        // the shape diagnostics and the fold.
        verhoeff::verify(value)
    }

    /// The field-level message a form surfaces when this kind rejects input.
    pub fn error_message(self) -> String {
        format!("Invalid {} number (Verhoeff failed)", self.label())
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    /// Both kinds accept the known-good fixture.
    #[test]
    fn both_kinds_accept_valid_number() {
        assert!(IdKind::Aadhaar.is_valid("499118665246"));
        assert!(IdKind::Apaar.is_valid("499118665246"));
    }

    /// Shape failures are rejected before the fold runs.
    #[test]
    fn shape_gate_rejects_malformed_input() {
        assert!(!IdKind::Aadhaar.is_valid(""));
        assert!(!IdKind::Aadhaar.is_valid("4991 1866 5246"));
        assert!(!IdKind::Apaar.is_valid("12345678901a"));
    }

    /// A well-shaped number with a wrong check digit is rejected.
    #[test]
    fn checksum_gate_rejects_corrupt_number() {
        assert!(!IdKind::Aadhaar.is_valid("499118665247"));
    }

    /// `verify` reports the same diagnostics as the underlying module.
    #[test]
    fn verify_reports_reason() {
        assert_eq!(
            IdKind::Aadhaar.verify("12345"),
            Err(VerhoeffError::WrongLength { len: 5 })
        );
        assert_eq!(
            IdKind::Apaar.verify("499118665247"),
            Err(VerhoeffError::ChecksumMismatch)
        );
        assert_eq!(IdKind::Aadhaar.verify("499118665246"), Ok(()));
    }

    /// Labels and error messages match what form callers surface.
    #[test]
    fn labels_and_messages() {
        assert_eq!(IdKind::Aadhaar.label(), "Aadhaar");
        assert_eq!(IdKind::Apaar.to_string(), "APAAR");
        assert_eq!(
            IdKind::Aadhaar.error_message(),
            "Invalid Aadhaar number (Verhoeff failed)"
        );
        assert_eq!(
            IdKind::Apaar.error_message(),
            "Invalid APAAR number (Verhoeff failed)"
        );
    }

    /// Kinds serialize to lowercase tags for the CLI's JSON mode.
    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_value(IdKind::Apaar).expect("serialize kind");
        assert_eq!(json, "apaar");
    }
}
