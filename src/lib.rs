pub mod cli;
pub mod config;
pub mod errors;
pub mod filter;
mod runner;
pub mod seq;

use crate::errors::FilterError;

pub fn run() -> Result<(), FilterError> {
    runner::run()
}
