// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{ffi::OsString, num::IntErrorKind, path::PathBuf};

use clap::{ArgAction, Parser};
use log::debug;

use crate::config::{FilterConfig, OutputTarget};
use crate::errors::FilterError;

pub const USAGE: &str = "
rmsingletons reads a FASTA file and filters the sequences according to their frequency value. \
The frequency is the one computed by the \"fastx_collapser\" program of the FASTX toolkit, i.e. \
the number after the last '-' of each sequence ID.

Usage:
\trmsingletons -i [FASTA file] -n [Frequency value]


Mandatory options:
\t-i, --input=FILE
\t\tThe input FASTA file to be filtered.
\t-n, --frequency=THRESHOLD
\t\tThis option sets the minimum frequency that a sequence must have.

Other options:
\t-h, --help
\t\tShow the options of the program.
\t-o, --output=FILE
\t\tWrite the output to the given file in FASTA format. By default this option is not set and \
the output is written to STDOUT.

";

// Options are collected as Vecs so that repeats can be reported by resolve() rather than by
// clap. The help flag is our own since -h must exit with status 1. Long options may be abbreviated
// to any unique prefix (--inp, --freq).
#[derive(Debug, Parser)]
#[command(name = "rmsingletons", disable_help_flag = true, infer_long_args = true)]
struct Cli {
    /// Input FastA file
    #[arg(short = 'i', long = "input", value_name = "FILE", action = ArgAction::Append)]
    input: Vec<PathBuf>,

    /// Minimum frequency
    #[arg(short = 'n', long = "frequency", value_name = "THRESHOLD",
        action = ArgAction::Append,
        allow_negative_numbers = true,
    )]
    frequency: Vec<String>,

    /// Output FastA file (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE", action = ArgAction::Append)]
    output: Vec<PathBuf>,

    /// Show usage
    #[arg(short = 'h', long = "help")]
    help: bool,

    // Operands are ignored. Option parsing stops at the first one, so anything after it is
    // swallowed too.
    #[arg(hide = true, trailing_var_arg = true)]
    operands: Vec<OsString>,
}

fn at_most_once<T>(
    mut values: Vec<T>,
    long: &'static str,
    short: char,
) -> Result<Option<T>, FilterError> {
    if values.len() > 1 {
        return Err(FilterError::AlreadySet { long, short });
    }
    Ok(values.pop())
}

fn check_input(path: PathBuf) -> Result<PathBuf, FilterError> {
    if path.exists() {
        Ok(path)
    } else {
        Err(FilterError::InputNotFound(path))
    }
}

// A bare file name (empty parent) means the current directory.
fn check_output(path: PathBuf) -> Result<OutputTarget, FilterError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            Err(FilterError::OutputDirNotFound(dir.to_path_buf()))
        }
        _ => Ok(OutputTarget::File(path)),
    }
}

fn parse_min_frequency(raw: String) -> Result<u64, FilterError> {
    match raw.trim().parse::<u64>() {
        Ok(n) if n >= 1 => Ok(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(FilterError::FrequencyTooLarge(raw)),
        _ => Err(FilterError::InvalidFrequency(raw)),
    }
}

/// Turns the raw argument list (program name first, as in `std::env::args_os()`) into a
/// validated `FilterConfig`. No arguments at all, or -h / --help, yield
/// `FilterError::HelpRequested`.
pub fn resolve<I, T>(args: I) -> Result<FilterConfig, FilterError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        return Err(FilterError::HelpRequested);
    }
    let cli = Cli::try_parse_from(args)?;
    debug!("{:?}", cli);
    if cli.help {
        return Err(FilterError::HelpRequested);
    }
    if !cli.operands.is_empty() {
        debug!("Ignoring operands: {:?}", cli.operands);
    }

    let input = at_most_once(cli.input, "input", 'i')?
        .map(check_input)
        .transpose()?;
    let output = at_most_once(cli.output, "output", 'o')?
        .map(check_output)
        .transpose()?
        .unwrap_or(OutputTarget::Stdout);
    let min_frequency = at_most_once(cli.frequency, "frequency", 'n')?
        .map(parse_min_frequency)
        .transpose()?;

    let input = input.ok_or(FilterError::MissingOption {
        what: "Input file",
        long: "input",
        short: 'i',
    })?;
    let min_frequency = min_frequency.ok_or(FilterError::MissingOption {
        what: "Sequence frequency threshold",
        long: "frequency",
        short: 'n',
    })?;

    Ok(FilterConfig {
        input,
        output,
        min_frequency,
    })
}
