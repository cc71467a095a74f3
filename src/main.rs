//! zabbixctl - A terminal view of active Zabbix triggers
//!
//! Lists current problems, narrows them down with filters and a search
//! pattern, and acknowledges the matches after an explicit confirmation.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

use std::process::ExitCode;

use colored::Colorize;

/// Main entry point for the zabbixctl CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:?}", "error:".red().bold());
            ExitCode::FAILURE
        },
    }
}
