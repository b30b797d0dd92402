//! hwbot - Telegram notifier for Yandex Practicum homework review status
//!
//! The binary is a thin wrapper: argument parsing, logger setup and the
//! polling loop all live in the library's `cli` module.

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

/// Main entry point for the hwbot daemon
fn main() {
    if let Err(error) = hwbot::cli::run() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
