/*!
Traits for public key construction.

This module defines the interface a provider implements to turn a validated
key spec into a public key handle.
*/

use crate::core::crypto::types::{PublicKeyHandle, PublicKeySpec};
use crate::core::error::Result;

/// Trait for public key construction inside a provider
pub trait PublicKeyFactory: Send + Sync {
    /// Build a public key from a validated spec on behalf of `provider`
    fn generate_public(&self, provider: &str, spec: &PublicKeySpec) -> Result<PublicKeyHandle>;
}

impl<F> PublicKeyFactory for F
where
    F: Fn(&str, &PublicKeySpec) -> Result<PublicKeyHandle> + Send + Sync,
{
    fn generate_public(&self, provider: &str, spec: &PublicKeySpec) -> Result<PublicKeyHandle> {
        self(provider, spec)
    }
}
