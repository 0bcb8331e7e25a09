use clap::Parser;

mod cli;
mod cmd;
mod error;
mod io;

use cli::{Cli, Command, PathOrStdin};
use error::CliError;

fn main() {
    let parsed = Cli::parse();
    if let Err(e) = dispatch(parsed) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Routes the parsed command line to its subcommand implementation.
fn dispatch(parsed: Cli) -> Result<(), CliError> {
    match parsed.command {
        Command::Validate {
            value,
            file,
            kind,
            format,
            quiet,
        } => {
            let values = gather_values(value, file)?;
            cmd::validate::run(&values, kind.into(), &format, quiet)
        }
        Command::Generate {
            payload,
            digit_only,
        } => cmd::generate::run(&payload, digit_only),
        Command::Mask { value } => cmd::mask::run(&value),
        Command::Version => {
            println!("{}", nidk_core::version());
            Ok(())
        }
    }
}

/// Resolves the validate arguments into the list of values to check.
///
/// A positional value of `-` reads a newline-delimited batch from stdin;
/// `--file` reads a batch from a path (or stdin via `-`). Clap guarantees
/// exactly one of the two argument forms is present.
fn gather_values(
    value: Option<String>,
    file: Option<PathOrStdin>,
) -> Result<Vec<String>, CliError> {
    if let Some(source) = file {
        return Ok(cmd::validate::batch_values(&io::read_input(&source)?));
    }
    match value {
        Some(v) if v == "-" => Ok(cmd::validate::batch_values(&io::read_input(
            &PathOrStdin::Stdin,
        )?)),
        Some(v) => Ok(vec![v]),
        None => Ok(Vec::new()),
    }
}
