/*!
Serialization support for key specs.

This module provides serializable mirrors of the key spec types. It's only
built when the `serde-support` feature is enabled. Deserializing goes
through the same validation as building a spec by hand.
*/

use serde::{Deserialize, Serialize};

use crate::core::crypto::types::{CurveFamily, KeySpec, PublicKeyHandle, PublicKeySpec, SpecShape};
use crate::core::error::{Error, Result};

/// Serializable version of PublicKeySpec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdePublicKeySpec {
    /// Curve family
    pub family: CurveFamily,
    /// Whether x is odd
    pub x_odd: bool,
    /// Little-endian y coordinate, exactly the family's key length
    pub y: Vec<u8>,
}

impl From<&PublicKeySpec> for SerdePublicKeySpec {
    fn from(spec: &PublicKeySpec) -> Self {
        let family = spec.family();
        let mut y = spec.point().y().as_le_bytes().to_vec();
        y.resize(family.key_length(), 0);
        Self {
            family,
            x_odd: spec.point().is_x_odd(),
            y,
        }
    }
}

impl TryFrom<SerdePublicKeySpec> for PublicKeySpec {
    type Error = Error;

    fn try_from(spec: SerdePublicKeySpec) -> Result<Self> {
        PublicKeySpec::from_raw(spec.family, spec.x_odd, &spec.y)
    }
}

/// Serializable version of KeySpec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeKeySpec {
    /// Shape the spec is presented in
    pub shape: SpecShape,
    /// The wrapped point and family
    #[serde(flatten)]
    pub spec: SerdePublicKeySpec,
}

impl From<&KeySpec> for SerdeKeySpec {
    fn from(spec: &KeySpec) -> Self {
        Self {
            shape: spec.shape(),
            spec: spec.public_key_spec().into(),
        }
    }
}

impl TryFrom<SerdeKeySpec> for KeySpec {
    type Error = Error;

    fn try_from(spec: SerdeKeySpec) -> Result<Self> {
        let inner = PublicKeySpec::try_from(spec.spec)?;
        Ok(match spec.shape {
            SpecShape::FamilySpecific => KeySpec::FamilySpecific(inner),
            SpecShape::Generic => KeySpec::Generic(inner),
        })
    }
}

/// Serializable summary of a constructed key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdePublicKeyHandle {
    /// Provider that built the key
    pub provider: String,
    /// Family and point the key carries
    pub spec: SerdePublicKeySpec,
}

impl From<&PublicKeyHandle> for SerdePublicKeyHandle {
    fn from(handle: &PublicKeyHandle) -> Self {
        Self {
            provider: handle.provider().to_string(),
            spec: handle.spec().into(),
        }
    }
}
