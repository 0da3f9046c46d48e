/*!
Key factory resolution.

Picks the provider that owns an algorithm identifier and delegates public
key construction to it. The first provider, in priority order, that
declares the identifier owns the outcome: if it rejects the spec shape the
resolution fails, even when a lower-priority provider would have accepted
it.
*/

use std::sync::Arc;

use crate::core::crypto::provider::Provider;
use crate::core::crypto::registry::ProviderRegistry;
use crate::core::crypto::types::{KeySpec, PublicKeyHandle};
use crate::core::error::{Error, Result};

/// Resolves algorithm identifiers against a caller-owned registry
#[derive(Debug, Clone, Copy)]
pub struct KeyFactoryResolver<'a> {
    registry: &'a ProviderRegistry,
}

impl<'a> KeyFactoryResolver<'a> {
    /// Create a resolver over `registry`
    pub fn new(registry: &'a ProviderRegistry) -> Self {
        Self { registry }
    }

    /// Get a key factory for `algorithm` from the highest-priority provider declaring it
    pub fn key_factory(&self, algorithm: &str) -> Result<BoundKeyFactory> {
        match self.registry.candidates(algorithm).first() {
            Some(provider) => {
                log::debug!("Resolved {} to provider {}", algorithm, provider.name());
                Ok(BoundKeyFactory {
                    algorithm: algorithm.to_string(),
                    provider: Arc::clone(provider),
                })
            }
            None => {
                log::debug!(
                    "No provider among {} installed supports {}",
                    self.registry.len(),
                    algorithm
                );
                Err(Error::NoProviderSupportsAlgorithm(algorithm.to_string()))
            }
        }
    }

    /// Resolve `algorithm` and build a public key from `spec`
    pub fn resolve_and_build(&self, algorithm: &str, spec: &KeySpec) -> Result<PublicKeyHandle> {
        self.key_factory(algorithm)?.generate_public(spec)
    }
}

/// Key factory bound to the provider that owns an algorithm identifier
#[derive(Debug, Clone)]
pub struct BoundKeyFactory {
    algorithm: String,
    provider: Arc<Provider>,
}

impl BoundKeyFactory {
    /// The algorithm identifier this factory was requested for
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The provider this factory delegates to
    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Build a public key from `spec`
    ///
    /// Fails with [`Error::SpecShapeRejected`] if the provider does not
    /// accept the spec's shape.
    pub fn generate_public(&self, spec: &KeySpec) -> Result<PublicKeyHandle> {
        let shape = spec.shape();
        if !self.provider.accepts(shape) {
            log::warn!(
                "Provider {} supports {} but rejects {} key specs",
                self.provider.name(),
                self.algorithm,
                shape
            );
            return Err(Error::SpecShapeRejected {
                provider: self.provider.name().to_string(),
                algorithm: self.algorithm.clone(),
                shape,
            });
        }

        let handle = self
            .provider
            .factory()
            .generate_public(self.provider.name(), spec.public_key_spec())?;
        log::debug!(
            "Provider {} built {} public key for {}",
            self.provider.name(),
            handle.family(),
            self.algorithm
        );
        Ok(handle)
    }
}
