/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `nidk` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2** — input failure: the tool could not read the input at
///   all. These errors terminate early before any domain logic runs.
/// - Exit code **1** — logical failure: the tool ran to completion but the
///   result is a well-defined failure (checksum failures, malformed payload).
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `nidk` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the fixed batch-input size cap.
    InputTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path).
        source: String,
        /// The size cap in bytes.
        limit: u64,
        /// The actual size in bytes, if known (disk files only; `None` for
        /// stdin where the exact size is unknown).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// A validation pass found one or more failing values.
    ///
    /// The per-value results have already been printed; this variant exists
    /// so `main` can call `process::exit(1)` cleanly.
    ChecksumFailures {
        /// How many values failed.
        invalid: usize,
        /// How many values were checked.
        total: usize,
    },

    /// A generation payload was empty or contained non-digit characters.
    InvalidPayload {
        /// Why the payload was rejected.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2` — input failure (file not found, unreadable input, etc.).
    /// - `1` — logical failure (checksum failures, malformed payload).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::InputTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. } => 2,

            Self::ChecksumFailures { .. } | Self::InvalidPayload { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::InputTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: input too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::InputTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: input too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ChecksumFailures { invalid, total } => {
                format!("error: {invalid} of {total} value(s) failed validation")
            }
            Self::InvalidPayload { detail } => {
                format!("error: invalid payload: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::path::PathBuf;

    use super::*;

    #[test]
    fn input_failures_are_exit_2() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("numbers.txt"),
            },
            CliError::PermissionDenied {
                path: PathBuf::from("/root/numbers.txt"),
            },
            CliError::InputTooLarge {
                source: "numbers.txt".to_owned(),
                limit: 1024,
                actual: Some(2048),
            },
            CliError::InvalidUtf8 {
                source: "-".to_owned(),
                byte_offset: 42,
            },
            CliError::StdinReadError {
                detail: "broken pipe".to_owned(),
            },
            CliError::IoError {
                source: "numbers.txt".to_owned(),
                detail: "interrupted".to_owned(),
            },
        ];
        for e in &errors {
            assert_eq!(e.exit_code(), 2, "{}", e.message());
        }
    }

    #[test]
    fn logical_failures_are_exit_1() {
        let failures = CliError::ChecksumFailures {
            invalid: 2,
            total: 5,
        };
        assert_eq!(failures.exit_code(), 1);

        let payload = CliError::InvalidPayload {
            detail: "non-digit character at position 3".to_owned(),
        };
        assert_eq!(payload.exit_code(), 1);
    }

    #[test]
    fn messages_carry_the_error_prefix_and_detail() {
        let e = CliError::ChecksumFailures {
            invalid: 1,
            total: 3,
        };
        assert_eq!(e.message(), "error: 1 of 3 value(s) failed validation");

        let e = CliError::InputTooLarge {
            source: "-".to_owned(),
            limit: 16,
            actual: None,
        };
        assert!(e.message().contains("exceeded limit of 16 bytes"));
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::InvalidPayload {
            detail: "input is empty".to_owned(),
        };
        assert_eq!(e.to_string(), e.message());
    }
}
