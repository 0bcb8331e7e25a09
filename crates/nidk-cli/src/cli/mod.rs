//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use nidk_core::IdKind;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].  This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for per-value validation results.
///
/// `Human` emits one plain line per value to stdout. `Json` emits one NDJSON
/// object per value.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable line-per-value output (default).
    Human,
    /// Structured NDJSON output.
    Json,
}

/// The identity-number kind a value is validated as.
///
/// Both kinds use the same 12-digit Verhoeff scheme; the kind selects the
/// label used in error messages and JSON output.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum IdKindArg {
    /// Aadhaar national identity number (default).
    Aadhaar,
    /// APAAR academic registry ID.
    Apaar,
}

impl From<IdKindArg> for IdKind {
    fn from(arg: IdKindArg) -> Self {
        match arg {
            IdKindArg::Aadhaar => IdKind::Aadhaar,
            IdKindArg::Apaar => IdKind::Apaar,
        }
    }
}

/// All top-level subcommands exposed by the `nidk` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Validate identity numbers against the Verhoeff checksum.
    Validate {
        /// A 12-digit identity number, or `-` to read newline-delimited
        /// numbers from stdin.
        #[arg(value_name = "VALUE", required_unless_present = "file", conflicts_with = "file")]
        value: Option<String>,
        /// Read newline-delimited numbers from a file (or `-` for stdin)
        /// instead of passing a single value.
        #[arg(long, value_name = "FILE")]
        file: Option<PathOrStdin>,
        /// Identity kind: aadhaar (default) or apaar.
        #[arg(long, default_value = "aadhaar")]
        kind: IdKindArg,
        /// Output format: human (default) or json (NDJSON, one object per value).
        #[arg(long, default_value = "human")]
        format: OutputFormat,
        /// Suppress per-value output; only the summary and exit code.
        #[arg(long)]
        quiet: bool,
    },

    /// Compute the Verhoeff check digit for an all-digit payload.
    Generate {
        /// The payload digits without a check digit (11 for Aadhaar/APAAR).
        #[arg(value_name = "PAYLOAD")]
        payload: String,
        /// Print only the check digit instead of the full number.
        #[arg(long)]
        digit_only: bool,
    },

    /// Redact an identity number for display, keeping the last 4 characters.
    Mask {
        /// The value to mask. Masking is total: any string is accepted.
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Print the nidk-core library version.
    Version,
}

/// The `nidk` command-line interface.
#[derive(Parser)]
#[command(
    name = "nidk",
    about = "Verhoeff check-digit validation and display redaction for Aadhaar and APAAR numbers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}
