//! Foundation types for folio.
//!
//! Platform-agnostic types shared by the terminal and host crates: input
//! events, renderable output nodes, configuration, and error types.

pub mod config;
pub mod error;
pub mod input;
pub mod node;
