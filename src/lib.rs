/*!
# EdDSA Key Spec

EdDSA public key construction through an ordered chain of pluggable
providers.

## Overview

Providers are registered, prioritized and removed at runtime. Each one
declares the algorithm identifiers it serves (the curve-agnostic `EdDSA`,
the curve-specific `Ed25519` / `Ed448`, or any mix) and the key spec shapes
it accepts. Resolving an identifier picks the first provider, in priority
order, that declares it; that provider then either builds the key or
rejects the spec shape. There is no fallback past a claiming provider.

- [`ProviderRegistry`] holds the providers; the caller owns it
- [`KeyFactoryResolver`] walks the registry and delegates construction
- [`PublicKeySpec`] validates a point (sign bit plus little-endian y
  coordinate, 32 bytes for Ed25519, 57 for Ed448) against its curve

```
use eddsa_keyspec::{CurveFamily, KeySpec, Provider, ProviderRegistry, PublicKeySpec};

let mut registry = ProviderRegistry::new();
registry.append(Provider::platform_ec())?;

let spec = PublicKeySpec::from_raw(CurveFamily::Ed25519, false, &[0u8; 32])?;
let key = registry
    .resolver()
    .resolve_and_build("Ed25519", &KeySpec::family_specific(spec))?;
assert_eq!(key.family(), CurveFamily::Ed25519);
# Ok::<(), eddsa_keyspec::Error>(())
```
*/

// Core components
pub mod core;

// Serialization support (optional)
#[cfg(feature = "serde-support")]
pub mod serde;

// Re-export commonly used types for convenience
pub use crate::core::error::{Error, ErrorKind, PointError, Result};
pub use crate::core::constants::{VERSION, identifiers, sizes};

pub use crate::core::crypto::config::{ProviderConfig, RegistryConfig};
pub use crate::core::crypto::provider::{FIPS_EDDSA, PLATFORM_EC, PointKeyFactory, Provider, ProviderBuilder};
pub use crate::core::crypto::registry::{ProviderRegistry, SharedProviderRegistry};
pub use crate::core::crypto::resolver::{BoundKeyFactory, KeyFactoryResolver};
pub use crate::core::crypto::traits::PublicKeyFactory;
pub use crate::core::crypto::types::{
    Coordinate, CurveFamily, EdPoint, KeySpec, PublicKeyHandle, PublicKeySpec, SpecShape,
};
