//! Implementation of `nidk validate <VALUE>` / `nidk validate --file <FILE>`.
//!
//! Validates one identity number, or a newline-delimited batch, against the
//! Verhoeff checksum. Per-value results go to stdout (one line per value,
//! NDJSON in `--format json`); the summary line goes to stderr. Values are
//! echoed in masked form only, so batch reports can be piped into logs
//! without leaking raw identity numbers.
//!
//! Exit codes:
//! - 0 = every value valid
//! - 1 = at least one value failed validation
//! - 2 = input failure (unreadable file, invalid UTF-8, oversized input)
use std::io::Write as _;

use nidk_core::{IdKind, VerhoeffError, mask_identity_number};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::error::CliError;

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `validate` command over the gathered values.
///
/// Each value is verified as `kind` and reported on its own stdout line
/// (suppressed by `quiet`). A summary is written to stderr. Returns
/// [`CliError::ChecksumFailures`] (exit code 1) when any value fails.
///
/// # Errors
///
/// - [`CliError::ChecksumFailures`] — one or more values failed.
/// - [`CliError::IoError`] — stdout could not be written.
pub fn run(
    values: &[String],
    kind: IdKind,
    format: &OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut invalid = 0usize;
    for (idx, value) in values.iter().enumerate() {
        let result = kind.verify(value);
        if result.is_err() {
            invalid += 1;
        }
        if quiet {
            continue;
        }

        let masked = mask_identity_number(value);
        let line = match format {
            OutputFormat::Human => human_line(idx + 1, &masked, result),
            OutputFormat::Json => json_line(idx + 1, &masked, kind, result).to_string(),
        };
        writeln!(out, "{line}").map_err(|e| CliError::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        })?;
    }

    let valid = values.len() - invalid;
    eprintln!(
        "checked {} value(s): {valid} valid, {invalid} invalid",
        values.len()
    );

    if invalid > 0 {
        Err(CliError::ChecksumFailures {
            invalid,
            total: values.len(),
        })
    } else {
        Ok(())
    }
}

/// Splits batch input into candidate values: one per line, trimmed, blank
/// lines skipped.
pub fn batch_values(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

// ---------------------------------------------------------------------------
// Line rendering
// ---------------------------------------------------------------------------

/// Renders one human-mode result line. `index` is 1-based.
fn human_line(index: usize, masked: &str, result: Result<(), VerhoeffError>) -> String {
    match result {
        Ok(()) => format!("{index}: {masked}: valid"),
        Err(e) => format!("{index}: {masked}: invalid ({e})"),
    }
}

/// Renders one NDJSON result object. `index` is 1-based.
fn json_line(
    index: usize,
    masked: &str,
    kind: IdKind,
    result: Result<(), VerhoeffError>,
) -> serde_json::Value {
    match result {
        Ok(()) => json!({
            "index": index,
            "masked": masked,
            "kind": kind,
            "valid": true,
        }),
        Err(e) => json!({
            "index": index,
            "masked": masked,
            "kind": kind,
            "valid": false,
            "error": e,
            "message": kind.error_message(),
        }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use super::*;

    /// Batch splitting trims whitespace and drops blank lines.
    #[test]
    fn batch_values_trims_and_skips_blanks() {
        let content = "499118665246\n\n  123456789010  \n\t\n12345\n";
        assert_eq!(
            batch_values(content),
            vec!["499118665246", "123456789010", "12345"]
        );
    }

    /// An empty batch produces no values.
    #[test]
    fn batch_values_empty_input() {
        assert!(batch_values("").is_empty());
        assert!(batch_values("\n\n").is_empty());
    }

    /// Human lines echo the masked value, never the raw one.
    #[test]
    fn human_line_valid_and_invalid() {
        assert_eq!(
            human_line(1, "XXXX XXXX 5246", Ok(())),
            "1: XXXX XXXX 5246: valid"
        );
        let line = human_line(2, "XXXX XXXX 5247", Err(VerhoeffError::ChecksumMismatch));
        assert_eq!(line, "2: XXXX XXXX 5247: invalid (Verhoeff check digit mismatch)");
    }

    /// JSON objects carry the kind tag, the masked value, and the error.
    #[test]
    fn json_line_shape() {
        let ok = json_line(1, "XXXX XXXX 5246", IdKind::Aadhaar, Ok(()));
        assert_eq!(ok["valid"], true);
        assert_eq!(ok["kind"], "aadhaar");
        assert_eq!(ok["masked"], "XXXX XXXX 5246");
        assert!(ok.get("error").is_none());

        let err = json_line(
            3,
            "X2345",
            IdKind::Apaar,
            Err(VerhoeffError::WrongLength { len: 5 }),
        );
        assert_eq!(err["valid"], false);
        assert_eq!(err["index"], 3);
        assert_eq!(err["error"]["kind"], "wrong_length");
        assert_eq!(err["error"]["len"], 5);
        assert_eq!(err["message"], "Invalid APAAR number (Verhoeff failed)");
    }

    /// `run` reports failures through the error value.
    #[test]
    fn run_flags_invalid_values() {
        let values = vec!["499118665246".to_owned(), "499118665247".to_owned()];
        let result = run(&values, IdKind::Aadhaar, &OutputFormat::Human, true);
        match result {
            Err(CliError::ChecksumFailures { invalid, total }) => {
                assert_eq!(invalid, 1);
                assert_eq!(total, 2);
            }
            other => panic!("expected ChecksumFailures, got {other:?}"),
        }
    }

    /// `run` succeeds when every value is valid.
    #[test]
    fn run_all_valid() {
        let values = vec!["499118665246".to_owned(), "123456789010".to_owned()];
        let result = run(&values, IdKind::Aadhaar, &OutputFormat::Json, true);
        assert!(result.is_ok());
    }
}
