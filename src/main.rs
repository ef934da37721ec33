// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::process::ExitCode;

use rmsingletons::errors::FilterError;

fn main() -> ExitCode {
    match rmsingletons::run() {
        Ok(()) => ExitCode::SUCCESS,
        // Usage text was already printed; help still counts as a failed run.
        Err(FilterError::HelpRequested) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\n[ERROR]: {}\n", e);
            ExitCode::FAILURE
        }
    }
}
