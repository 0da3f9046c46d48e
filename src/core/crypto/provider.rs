/*!
Pluggable key construction providers.

A provider is a named implementation unit that declares which algorithm
identifiers it serves and which spec shapes it accepts. Providers are
immutable once built; replacing one means removing it from the registry and
inserting a new one.
*/

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::core::constants::identifiers;
use crate::core::crypto::traits::PublicKeyFactory;
use crate::core::crypto::types::{PublicKeyHandle, PublicKeySpec, SpecShape};
use crate::core::error::Result;

/// Name of the platform EC provider preset
pub const PLATFORM_EC: &str = "platform-ec";

/// Name of the FIPS EdDSA provider preset
pub const FIPS_EDDSA: &str = "fips-eddsa";

/// Key factory that hands the validated point back untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PointKeyFactory;

impl PublicKeyFactory for PointKeyFactory {
    fn generate_public(&self, provider: &str, spec: &PublicKeySpec) -> Result<PublicKeyHandle> {
        Ok(PublicKeyHandle::new(provider, spec.clone()))
    }
}

/// An installed implementation of one or more EdDSA algorithms
pub struct Provider {
    name: String,
    algorithms: BTreeSet<String>,
    shapes: BTreeSet<SpecShape>,
    factory: Arc<dyn PublicKeyFactory>,
}

impl Provider {
    /// Start building a provider with the given name
    pub fn builder(name: impl Into<String>) -> ProviderBuilder {
        ProviderBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this provider declares the algorithm identifier (exact match)
    pub fn supports(&self, algorithm: &str) -> bool {
        self.algorithms.contains(algorithm)
    }

    /// Whether this provider accepts specs of the given shape
    pub fn accepts(&self, shape: SpecShape) -> bool {
        self.shapes.contains(&shape)
    }

    /// Declared algorithm identifiers, sorted
    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.algorithms.iter().map(String::as_str)
    }

    /// Accepted spec shapes
    pub fn shapes(&self) -> impl Iterator<Item = SpecShape> + '_ {
        self.shapes.iter().copied()
    }

    /// The key factory this provider delegates construction to
    pub fn factory(&self) -> &dyn PublicKeyFactory {
        self.factory.as_ref()
    }

    /// Provider modelled on a platform EC implementation
    ///
    /// Serves both the generic and the curve-specific identifiers and only
    /// accepts family-specific specs.
    pub fn platform_ec() -> Self {
        Provider::builder(PLATFORM_EC)
            .with_algorithm(identifiers::EDDSA)
            .with_algorithm(identifiers::ED25519)
            .with_algorithm(identifiers::ED448)
            .accepting(SpecShape::FamilySpecific)
            .build()
    }

    /// Provider modelled on a FIPS module
    ///
    /// Serves only the generic identifier and only accepts generic specs.
    pub fn fips_eddsa() -> Self {
        Provider::builder(FIPS_EDDSA)
            .with_algorithm(identifiers::EDDSA)
            .accepting(SpecShape::Generic)
            .build()
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("name", &self.name)
            .field("algorithms", &self.algorithms)
            .field("shapes", &self.shapes)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Provider`]
pub struct ProviderBuilder {
    name: String,
    algorithms: BTreeSet<String>,
    shapes: BTreeSet<SpecShape>,
    factory: Arc<dyn PublicKeyFactory>,
}

impl ProviderBuilder {
    /// Create a builder with no algorithms, no shapes and the pass-through key factory
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            algorithms: BTreeSet::new(),
            shapes: BTreeSet::new(),
            factory: Arc::new(PointKeyFactory),
        }
    }

    /// Declare support for an algorithm identifier
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithms.insert(algorithm.into());
        self
    }

    /// Declare support for several algorithm identifiers
    pub fn with_algorithms<I, S>(mut self, algorithms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.algorithms.extend(algorithms.into_iter().map(Into::into));
        self
    }

    /// Accept specs of the given shape
    pub fn accepting(mut self, shape: SpecShape) -> Self {
        self.shapes.insert(shape);
        self
    }

    /// Use a custom key factory
    pub fn with_key_factory(mut self, factory: impl PublicKeyFactory + 'static) -> Self {
        self.factory = Arc::new(factory);
        self
    }

    /// Build the provider
    pub fn build(self) -> Provider {
        Provider {
            name: self.name,
            algorithms: self.algorithms,
            shapes: self.shapes,
            factory: self.factory,
        }
    }
}
