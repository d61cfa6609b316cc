//! Binary entrypoint.
//!
//! This crate is intentionally split into Clean Architecture layers:
//! - domain: pure, synchronous ordering rules
//! - usecase: workflows + progress events
//! - infrastructure: serde + file IO + implementations of ports
//! - interface: CLI wiring

use std::process::ExitCode;

use retailer_sorter::usecase::pipeline::RunError;

fn main() -> ExitCode {
    if let Err(err) = retailer_sorter::interface::cli::run() {
        eprintln!("{}", error_message(&err));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

// `{:#}` keeps the whole context chain on one line; the missing-source
// variant renders as its own worded message.
fn error_message(err: &RunError) -> String {
    format!("error: {err:#}")
}
