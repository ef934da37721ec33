// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use log::debug;

use crate::seq::record::SeqRecord;

/// Streams FastA records out of any buffered reader, one record per call to `next()`. Only the
/// record being assembled is held in memory.
pub struct FastaReader<R> {
    lines: Lines<R>,
    // Header line already consumed while reading the previous record's sequence.
    next_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        FastaReader {
            lines: reader.lines(),
            next_header: None,
        }
    }

    // Skips anything before the first header (comments, blank lines).
    fn find_first_header(&mut self) -> Option<io::Result<String>> {
        let mut skipped = 0;
        for line in self.lines.by_ref() {
            match line {
                Err(e) => return Some(Err(e)),
                Ok(l) => {
                    if let Some(hdr) = l.strip_prefix('>') {
                        if skipped > 0 {
                            debug!("Skipped {} line(s) before first FastA header", skipped);
                        }
                        return Some(Ok(hdr.to_string()));
                    }
                    skipped += 1;
                }
            }
        }
        None
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = io::Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = match self.next_header.take() {
            Some(hdr) => hdr,
            None => match self.find_first_header()? {
                Ok(hdr) => hdr,
                Err(e) => return Some(Err(e)),
            },
        };

        let mut sequence = String::new();
        for line in self.lines.by_ref() {
            let l = match line {
                Ok(l) => l,
                Err(e) => return Some(Err(e)),
            };
            if let Some(hdr) = l.strip_prefix('>') {
                self.next_header = Some(hdr.to_string());
                break;
            }
            // append line to current record's sequence
            sequence.extend(l.chars().filter(|c| !c.is_whitespace()));
        }

        Some(Ok(SeqRecord {
            header: header.trim_end().to_string(),
            sequence,
        }))
    }
}

pub fn open_fasta_file<P: AsRef<Path>>(path: P) -> Result<FastaReader<BufReader<File>>, io::Error> {
    let file = File::open(path)?;
    Ok(FastaReader::new(BufReader::new(file)))
}
