/*!
Registry manager for key construction providers.

The registry is an ordered list of providers, consulted front to back.
Alongside the list it keeps an index from algorithm identifier to the
ordered providers that declare it, rebuilt on every mutation so resolution
never scans providers that cannot match.
*/

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::crypto::config::RegistryConfig;
use crate::core::crypto::provider::Provider;
use crate::core::crypto::resolver::KeyFactoryResolver;
use crate::core::crypto::types::{KeySpec, PublicKeyHandle};
use crate::core::error::{Error, Result};

/// Ordered, named set of installed providers
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    /// Providers in priority order, most preferred first
    providers: Vec<Arc<Provider>>,

    /// Algorithm identifier to the providers declaring it, in priority order
    candidates: HashMap<String, Vec<Arc<Provider>>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a validated configuration
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        config.build()
    }

    /// Insert a provider at a 1-based priority position
    ///
    /// Entries at or after `position` move one place down. Positions outside
    /// `1..=len + 1` append. Returns the position the provider now holds.
    pub fn insert_at(&mut self, provider: impl Into<Arc<Provider>>, position: usize) -> Result<usize> {
        let provider = provider.into();
        self.ensure_unique(provider.name())?;

        let index = if position == 0 || position > self.providers.len() {
            self.providers.len()
        } else {
            position - 1
        };

        log::info!("Installing provider {} at position {}", provider.name(), index + 1);
        self.providers.insert(index, provider);
        self.rebuild_index();
        Ok(index + 1)
    }

    /// Insert a provider at the lowest priority
    pub fn append(&mut self, provider: impl Into<Arc<Provider>>) -> Result<usize> {
        self.insert_at(provider, self.providers.len() + 1)
    }

    /// Remove the named provider, if installed
    ///
    /// Removing a name that is not installed is a no-op.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Arc<Provider>> {
        let index = self.providers.iter().position(|p| p.name() == name)?;
        let removed = self.providers.remove(index);
        log::info!("Removed provider {} from position {}", name, index + 1);
        self.rebuild_index();
        Some(removed)
    }

    /// Look up an installed provider by name
    pub fn lookup(&self, name: &str) -> Option<&Arc<Provider>> {
        self.providers.iter().find(|p| p.name() == name)
    }

    /// 1-based priority position of the named provider
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.providers.iter().position(|p| p.name() == name).map(|i| i + 1)
    }

    /// Installed providers in priority order
    ///
    /// Each call walks the registry as it is now.
    pub fn ordered_providers(&self) -> impl ExactSizeIterator<Item = &Arc<Provider>> + '_ {
        self.providers.iter()
    }

    /// Providers declaring `algorithm`, in priority order
    pub fn candidates(&self, algorithm: &str) -> &[Arc<Provider>] {
        self.candidates.get(algorithm).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of installed providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Uninstall every provider
    pub fn clear(&mut self) {
        log::info!("Clearing {} installed providers", self.providers.len());
        self.providers.clear();
        self.candidates.clear();
    }

    /// Resolver bound to this registry
    pub fn resolver(&self) -> KeyFactoryResolver<'_> {
        KeyFactoryResolver::new(self)
    }

    fn ensure_unique(&self, name: &str) -> Result<()> {
        if self.lookup(name).is_some() {
            log::warn!("Rejected duplicate provider {}", name);
            return Err(Error::DuplicateProviderName(name.to_string()));
        }
        Ok(())
    }

    fn rebuild_index(&mut self) {
        self.candidates.clear();
        for provider in &self.providers {
            for algorithm in provider.algorithms() {
                self.candidates
                    .entry(algorithm.to_string())
                    .or_default()
                    .push(Arc::clone(provider));
            }
        }
    }
}

/// Registry shared between threads
///
/// Every mutation and every resolution runs under one lock over the whole
/// registry, so a resolution never observes a half-applied insert.
#[derive(Debug, Clone, Default)]
pub struct SharedProviderRegistry {
    inner: Arc<RwLock<ProviderRegistry>>,
}

impl SharedProviderRegistry {
    /// Share an existing registry
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// See [`ProviderRegistry::insert_at`]
    pub fn insert_at(&self, provider: impl Into<Arc<Provider>>, position: usize) -> Result<usize> {
        self.write().insert_at(provider, position)
    }

    /// See [`ProviderRegistry::append`]
    pub fn append(&self, provider: impl Into<Arc<Provider>>) -> Result<usize> {
        self.write().append(provider)
    }

    /// See [`ProviderRegistry::remove_by_name`]
    pub fn remove_by_name(&self, name: &str) -> Option<Arc<Provider>> {
        self.write().remove_by_name(name)
    }

    /// See [`ProviderRegistry::lookup`]
    pub fn lookup(&self, name: &str) -> Option<Arc<Provider>> {
        self.read().lookup(name).cloned()
    }

    /// Provider names in current priority order
    pub fn provider_names(&self) -> Vec<String> {
        self.read()
            .ordered_providers()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// See [`KeyFactoryResolver::resolve_and_build`]
    pub fn resolve_and_build(&self, algorithm: &str, spec: &KeySpec) -> Result<PublicKeyHandle> {
        self.read().resolver().resolve_and_build(algorithm, spec)
    }

    /// Run `f` with exclusive access to the registry
    pub fn with_registry<T>(&self, f: impl FnOnce(&mut ProviderRegistry) -> T) -> T {
        f(&mut *self.write())
    }

    // Mutations never leave the registry half-applied, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, ProviderRegistry> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProviderRegistry> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
