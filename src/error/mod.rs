//! Error handling
//!
//! Defines error types and handling for the folder store.

pub mod handlers;
pub mod types;

pub use types::*;
