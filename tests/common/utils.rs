// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;

use rmsingletons::seq::{fasta::FastaReader, record::SeqRecord};

#[allow(dead_code)]
pub fn data_file(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "data", name]
        .iter()
        .collect();
    path.to_str().expect("utf-8 path").to_string()
}

// Runs the binary with the given arguments, RUST_LOG unset so stderr only carries errors.
#[allow(dead_code)]
pub fn run_bin(args: &[&str]) -> Output {
    Command::cargo_bin("rmsingletons")
        .expect("binary built")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run rmsingletons")
}

#[allow(dead_code)]
pub fn parse_fasta(text: &str) -> Vec<SeqRecord> {
    FastaReader::new(text.as_bytes())
        .collect::<Result<_, _>>()
        .expect("reparse output")
}

#[allow(dead_code)]
pub fn stdout_of(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("utf-8 stdout")
}

#[allow(dead_code)]
pub fn stderr_of(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).expect("utf-8 stderr")
}
