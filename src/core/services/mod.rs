//! Polling services
//!
//! Orchestration logic that operates on domain models through the port
//! traits.
//!
//! - [`poller`] - the fetch → validate → parse → notify cycle and the loop

pub mod poller;

pub use poller::{CycleOutcome, POLL_INTERVAL, run, run_cycle};
