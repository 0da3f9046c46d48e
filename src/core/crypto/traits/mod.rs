/*!
Core traits for key construction.

This module defines the interfaces providers implement.
*/

pub mod key_factory;

// Re-export core traits for easier access
pub use key_factory::PublicKeyFactory;
