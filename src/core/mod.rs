//! Core components for EdDSA key construction.
//!
//! This module contains the provider registry, key factory resolution,
//! point validation, constants and error handling.

// Providers, registry, resolution and key specs
pub mod crypto;

// Constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, ErrorKind, PointError, Result};
pub use self::constants::VERSION;
