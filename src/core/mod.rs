//! Core polling logic
//!
//! This module contains the change-detection and error-reporting logic with
//! no I/O dependencies. All external interactions are abstracted through
//! port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Status, ApiPage, Session)
//! - `services/` - The polling loop itself
//! - `ports/` - Trait definitions for the two network surfaces

pub mod models;
pub mod ports;
pub mod services;
