/*!
Declarative provider configuration.

A [`RegistryConfig`] lists providers in priority order and builds a
[`ProviderRegistry`] from them. Named presets cover the common provider
arrangements.
*/

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::constants::identifiers;
use crate::core::crypto::provider::{FIPS_EDDSA, PLATFORM_EC, Provider};
use crate::core::crypto::registry::ProviderRegistry;
use crate::core::crypto::types::SpecShape;
use crate::core::error::Result;
use crate::invalid_config_err;

/// Configuration of a single provider
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct ProviderConfig {
    /// Unique provider name
    pub name: String,
    /// Algorithm identifiers the provider declares
    pub algorithms: Vec<String>,
    /// Spec shapes the provider accepts
    pub shapes: Vec<SpecShape>,
}

impl ProviderConfig {
    /// Create a configuration with no algorithms and no shapes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            algorithms: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Declare an algorithm identifier
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithms.push(algorithm.into());
        self
    }

    /// Accept a spec shape
    pub fn accepting(mut self, shape: SpecShape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Configuration matching [`Provider::platform_ec`]
    pub fn platform_ec() -> Self {
        Self::new(PLATFORM_EC)
            .with_algorithm(identifiers::EDDSA)
            .with_algorithm(identifiers::ED25519)
            .with_algorithm(identifiers::ED448)
            .accepting(SpecShape::FamilySpecific)
    }

    /// Configuration matching [`Provider::fips_eddsa`]
    pub fn fips_eddsa() -> Self {
        Self::new(FIPS_EDDSA)
            .with_algorithm(identifiers::EDDSA)
            .accepting(SpecShape::Generic)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return invalid_config_err!("provider name must not be empty");
        }
        if let Some(algorithm) = self.algorithms.iter().find(|a| a.trim().is_empty()) {
            return invalid_config_err!(
                "provider {} declares an empty algorithm identifier {:?}",
                self.name,
                algorithm
            );
        }
        Ok(())
    }

    /// Build the provider with the pass-through key factory
    pub fn build(&self) -> Result<Provider> {
        self.validate()?;
        let mut builder = Provider::builder(self.name.clone()).with_algorithms(self.algorithms.iter().cloned());
        for shape in &self.shapes {
            builder = builder.accepting(*shape);
        }
        Ok(builder.build())
    }
}

impl From<&Provider> for ProviderConfig {
    fn from(provider: &Provider) -> Self {
        Self {
            name: provider.name().to_string(),
            algorithms: provider.algorithms().map(str::to_string).collect(),
            shapes: provider.shapes().collect(),
        }
    }
}

/// Providers to install, most preferred first
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct RegistryConfig {
    /// Providers in priority order
    pub providers: Vec<ProviderConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::platform_only()
    }
}

impl RegistryConfig {
    /// Create a configuration with no providers
    pub fn empty() -> Self {
        Self { providers: Vec::new() }
    }

    /// Only the platform EC provider
    pub fn platform_only() -> Self {
        Self {
            providers: vec![ProviderConfig::platform_ec()],
        }
    }

    /// FIPS provider ahead of the platform EC provider
    pub fn fips_first() -> Self {
        Self {
            providers: vec![ProviderConfig::fips_eddsa(), ProviderConfig::platform_ec()],
        }
    }

    /// Only the FIPS provider
    pub fn fips_only() -> Self {
        Self {
            providers: vec![ProviderConfig::fips_eddsa()],
        }
    }

    /// Add a provider at the lowest priority
    pub fn with_provider(mut self, provider: ProviderConfig) -> Self {
        self.providers.push(provider);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (i, provider) in self.providers.iter().enumerate() {
            provider.validate()?;
            if self.providers[..i].iter().any(|p| p.name == provider.name) {
                return invalid_config_err!("provider {} listed more than once", provider.name);
            }
        }
        Ok(())
    }

    /// Build a registry holding the configured providers in order
    pub fn build(&self) -> Result<ProviderRegistry> {
        self.validate()?;
        let mut registry = ProviderRegistry::new();
        for provider in &self.providers {
            registry.append(provider.build()?)?;
        }
        Ok(registry)
    }
}

impl From<&ProviderRegistry> for RegistryConfig {
    fn from(registry: &ProviderRegistry) -> Self {
        Self {
            providers: registry
                .ordered_providers()
                .map(|p| ProviderConfig::from(p.as_ref()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{Error, ErrorKind};

    #[test]
    fn test_presets_build() {
        let registry = RegistryConfig::default().build().unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup(PLATFORM_EC).is_some());

        let registry = RegistryConfig::fips_first().build().unwrap();
        assert_eq!(registry.position_of(FIPS_EDDSA), Some(1));
        assert_eq!(registry.position_of(PLATFORM_EC), Some(2));

        assert!(RegistryConfig::empty().build().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let config = RegistryConfig::platform_only().with_provider(ProviderConfig::platform_ec());
        assert_eq!(
            config.validate(),
            Err(Error::InvalidConfig("provider platform-ec listed more than once".to_string()))
        );
    }

    #[test]
    fn test_empty_names_rejected() {
        let config = RegistryConfig::empty().with_provider(ProviderConfig::new("  "));
        assert_eq!(config.build().unwrap_err().kind(), ErrorKind::InvalidConfig);

        let config = ProviderConfig::new("p").with_algorithm("");
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_config_matches_preset_providers() {
        assert_eq!(ProviderConfig::from(&Provider::platform_ec()), {
            let mut config = ProviderConfig::platform_ec();
            config.algorithms.sort();
            config
        });
        assert_eq!(ProviderConfig::from(&Provider::fips_eddsa()), ProviderConfig::fips_eddsa());
    }

    #[test]
    fn test_registry_to_config() {
        let registry = RegistryConfig::fips_first().build().unwrap();
        let config = RegistryConfig::from(&registry);
        let names: Vec<_> = config.providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec![FIPS_EDDSA, PLATFORM_EC]);
    }
}
