//! # Plantao Infrastructure
//!
//! Infrastructure implementations of core ports and process wiring.
//!
//! This crate contains:
//! - Configuration loading (environment variables, JSON and TOML files)
//! - `tracing` subscriber initialisation
//! - An in-memory gateway implementing every `plantao-core` port
//!
//! ## Architecture
//! - Implements traits defined in `plantao-core`
//! - Contains all "impure" code (environment, filesystem, global subscriber)

pub mod config;
pub mod logging;
pub mod memory;

// Re-export commonly used items
pub use logging::init_tracing;
pub use memory::InMemoryGateway;
