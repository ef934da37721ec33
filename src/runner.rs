// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::info;

use crate::cli::{resolve, USAGE};
use crate::errors::FilterError;
use crate::filter::filter_fasta;

pub fn run() -> Result<(), FilterError> {
    env_logger::init();
    info!("Starting log");

    let config = match resolve(std::env::args_os()) {
        Err(FilterError::HelpRequested) => {
            print!("{}", USAGE);
            return Err(FilterError::HelpRequested);
        }
        resolved => resolved?,
    };
    info!(
        "Filtering {} -> {}, minimum frequency {}",
        config.input.display(),
        config.output,
        config.min_frequency
    );

    let stats = filter_fasta(&config)?;
    info!("Done: {} of {} records written", stats.kept, stats.total);
    Ok(())
}
