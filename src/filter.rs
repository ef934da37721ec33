// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs::File,
    io::{self, stdout, BufWriter, Write},
};

use log::{info, trace};

use crate::config::{FilterConfig, OutputTarget};
use crate::errors::FilterError;
use crate::seq::fasta::open_fasta_file;
use crate::seq::record::SeqRecord;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub total: usize,
    pub kept: usize,
}

/// Read frequency of a collapsed sequence, i.e. the integer after the last '-' of its ID (as in
/// `>42-1520`).
pub fn frequency(header: &str) -> Result<u64, FilterError> {
    if header.is_empty() {
        return Err(FilterError::EmptyId);
    }
    // rsplit() always yields at least one item
    let suffix = header.rsplit('-').next().unwrap_or(header);
    suffix
        .trim()
        .parse::<u64>()
        .map_err(|source| FilterError::BadFrequency {
            header: header.to_string(),
            source,
        })
}

/// Copies to `out` every record whose frequency is at least `min_frequency`, in input order.
/// Stops at the first bad record; whatever was written before stays written.
pub fn filter_records<I, W>(
    records: I,
    out: &mut W,
    min_frequency: u64,
) -> Result<FilterStats, FilterError>
where
    I: IntoIterator<Item = io::Result<SeqRecord>>,
    W: Write,
{
    let mut stats = FilterStats::default();
    for record in records {
        let record = record?;
        stats.total += 1;
        let freq = frequency(&record.header)?;
        if freq >= min_frequency {
            trace!("keep {} (frequency {})", record.header, freq);
            writeln!(out, "{}", record)?;
            stats.kept += 1;
        } else {
            trace!("drop {} (frequency {})", record.header, freq);
        }
    }
    Ok(stats)
}

pub fn filter_fasta(config: &FilterConfig) -> Result<FilterStats, FilterError> {
    // Output is opened (and truncated) before the input is read.
    let mut out: Box<dyn Write> = match &config.output {
        OutputTarget::Stdout => Box::new(BufWriter::new(stdout().lock())),
        OutputTarget::File(path) => Box::new(BufWriter::new(File::create(path)?)),
    };
    info!("Reading {}", config.input.display());
    let reader = open_fasta_file(&config.input)?;

    let result = filter_records(reader, &mut out, config.min_frequency);
    // Keep what was already written, even on error.
    let flushed = out.flush();
    let stats = result?;
    flushed?;
    Ok(stats)
}
