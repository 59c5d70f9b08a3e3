//! # Pickup Common Library
//!
//! Shared code for the pickup session persistence tools:
//! - Error types
//! - Session event vocabulary and the serialized event queue
//! - State file location resolution

pub mod config;
pub mod error;
pub mod events;

pub use error::{Error, Result};
