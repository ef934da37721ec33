// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io, num::ParseIntError, path::PathBuf};

#[derive(Debug)]
pub enum FilterError {
    Io(io::Error),
    Cli(clap::Error),
    HelpRequested,
    AlreadySet {
        long: &'static str,
        short: char,
    },
    MissingOption {
        what: &'static str,
        long: &'static str,
        short: char,
    },
    InvalidFrequency(String),
    FrequencyTooLarge(String),
    InputNotFound(PathBuf),
    OutputDirNotFound(PathBuf),
    EmptyId,
    BadFrequency {
        header: String,
        source: ParseIntError,
    },
}

// These allow conversion to FilterError, required for run() to return Result<()> and for '?' to
// work.

impl From<io::Error> for FilterError {
    fn from(e: io::Error) -> Self {
        FilterError::Io(e)
    }
}

impl From<clap::Error> for FilterError {
    fn from(e: clap::Error) -> Self {
        FilterError::Cli(e)
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::Io(e) => write!(f, "I/O error: {}", e),
            // clap already renders "error: ..." followed by a usage hint.
            FilterError::Cli(e) => {
                let rendered = e.to_string();
                write!(f, "{}", rendered.trim_start_matches("error: ").trim_end())
            }
            FilterError::HelpRequested => write!(f, "Help requested"),
            FilterError::AlreadySet { long, short } => write!(
                f,
                "Trying to redefine the {}. Option -{} / --{} was already set.",
                option_noun(long),
                short,
                long
            ),
            FilterError::MissingOption { what, long, short } => {
                write!(f, "{} not defined. Option -{} / --{}.", what, short, long)
            }
            FilterError::InvalidFrequency(value) => write!(
                f,
                "The minimum sequence frequency must be an integer greater or equal than 1, got '{}'. See option -n / --frequency.",
                value
            ),
            FilterError::FrequencyTooLarge(value) => write!(
                f,
                "The minimum sequence frequency '{}' is too large (at most {}). See option -n / --frequency.",
                value,
                u64::MAX
            ),
            FilterError::InputNotFound(path) => write!(
                f,
                "File or path of the input file does not exist: {}",
                path.display()
            ),
            FilterError::OutputDirNotFound(dir) => write!(
                f,
                "Path to write the output does not exist: {}",
                dir.display()
            ),
            FilterError::EmptyId => write!(f, "No ID for some sequence in the FASTA file"),
            FilterError::BadFrequency { header, source } => write!(
                f,
                "Cannot parse a frequency from sequence ID '{}': {}",
                header, source
            ),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::Io(e) => Some(e),
            FilterError::Cli(e) => Some(e),
            FilterError::BadFrequency { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn option_noun(long: &str) -> &'static str {
    match long {
        "input" => "input file",
        "output" => "output file",
        "frequency" => "minimum sequence frequency",
        _ => "option",
    }
}
