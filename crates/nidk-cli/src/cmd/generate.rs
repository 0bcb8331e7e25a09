//! Implementation of `nidk generate <PAYLOAD>`.
//!
//! Computes the Verhoeff check digit for an all-digit payload and prints the
//! full number (payload + digit) to stdout, or just the digit with
//! `--digit-only`. Intended for building test fixtures and repair flows.
//!
//! Exit codes:
//! - 0 = success
//! - 1 = malformed payload (empty or non-digit characters)
use std::io::Write as _;

use nidk_core::check_digit;

use crate::error::CliError;

/// Runs the `generate` command.
///
/// # Errors
///
/// - [`CliError::InvalidPayload`] — the payload is empty or contains a
///   non-digit character.
/// - [`CliError::IoError`] — stdout could not be written.
pub fn run(payload: &str, digit_only: bool) -> Result<(), CliError> {
    let digit = check_digit(payload).map_err(|e| CliError::InvalidPayload {
        detail: e.to_string(),
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = if digit_only {
        writeln!(out, "{digit}")
    } else {
        writeln!(out, "{payload}{digit}")
    };
    result.map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}
