//! Adapter implementations for port traits
//!
//! This module contains the concrete implementations that handle network
//! I/O:
//!
//! - `practicum` - blocking client for the homework review API
//! - `telegram` - blocking client for the Telegram Bot API

pub mod practicum;
pub mod telegram;

pub use practicum::PracticumClient;
pub use telegram::TelegramBot;
