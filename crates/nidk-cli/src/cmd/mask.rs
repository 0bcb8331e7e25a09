//! Implementation of `nidk mask <VALUE>`.
//!
//! Prints the display-safe redacted form of an identity number. Masking is
//! total: every input string succeeds, including malformed legacy values.
//!
//! Exit codes:
//! - 0 = success (always, given writable stdout)
use std::io::Write as _;

use nidk_core::mask_identity_number;

use crate::error::CliError;

/// Runs the `mask` command.
///
/// # Errors
///
/// - [`CliError::IoError`] — stdout could not be written.
pub fn run(value: &str) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", mask_identity_number(value)).map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}
