/*!
Provider resolution and EdDSA public key construction.

This module provides the provider registry, the key factory resolver and
the point and key spec types they operate on.
*/

// Provider configuration
pub mod config;

// Pluggable providers
pub mod provider;

// Registry for provider management
pub mod registry;

// Key factory resolution
pub mod resolver;

// Provider traits
pub mod traits;

// Points, specs and handles
pub mod types;

// Re-export frequently used types
pub use config::{ProviderConfig, RegistryConfig};
pub use provider::{PointKeyFactory, Provider, ProviderBuilder};
pub use registry::{ProviderRegistry, SharedProviderRegistry};
pub use resolver::{BoundKeyFactory, KeyFactoryResolver};
pub use traits::PublicKeyFactory;
pub use types::{Coordinate, CurveFamily, EdPoint, KeySpec, PublicKeyHandle, PublicKeySpec, SpecShape};
