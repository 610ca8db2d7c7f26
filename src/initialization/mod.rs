//! Process-wide resource setup.
//!
//! This module provides:
//! - The HTTP client shared by every service call
//! - Logger initialization (plain or JSON)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
