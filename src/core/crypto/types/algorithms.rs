/*!
Curve family and spec shape definitions.
*/

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::constants::{identifiers, sizes};
use crate::core::crypto::types::point::Coordinate;
use crate::core::error::PointError;

/// Supported Edwards curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum CurveFamily {
    /// edwards25519, RFC 8032 section 5.1
    Ed25519,
    /// edwards448, RFC 8032 section 5.2
    Ed448,
}

impl CurveFamily {
    /// All supported families
    pub const ALL: [CurveFamily; 2] = [CurveFamily::Ed25519, CurveFamily::Ed448];

    /// Get the name of the curve as a string
    pub fn name(&self) -> &'static str {
        match self {
            CurveFamily::Ed25519 => identifiers::ED25519,
            CurveFamily::Ed448 => identifiers::ED448,
        }
    }

    /// Size of an encoded public key (and of a raw coordinate) in bytes
    pub fn key_length(&self) -> usize {
        match self {
            CurveFamily::Ed25519 => sizes::ed25519::PUBLIC_KEY_BYTES,
            CurveFamily::Ed448 => sizes::ed448::PUBLIC_KEY_BYTES,
        }
    }

    /// Maximum bit width of the y coordinate
    pub fn coordinate_bits(&self) -> usize {
        match self {
            CurveFamily::Ed25519 => sizes::ed25519::COORDINATE_BITS,
            CurveFamily::Ed448 => sizes::ed448::COORDINATE_BITS,
        }
    }

    /// The field prime the coordinate must be reduced by
    pub fn field_prime(&self) -> Coordinate {
        match self {
            CurveFamily::Ed25519 => Coordinate::from_le_bytes(&sizes::ed25519::FIELD_PRIME_LE),
            CurveFamily::Ed448 => Coordinate::from_le_bytes(&sizes::ed448::FIELD_PRIME_LE),
        }
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveFamily {
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveFamily::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PointError::UnknownCurve(s.to_string()))
    }
}

/// Structural form of a key construction input
///
/// The same point can be handed to a key factory in either shape; providers
/// declare which shapes they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum SpecShape {
    /// Spec bound to a named curve family
    #[cfg_attr(feature = "serde-support", serde(rename = "family-specific-spec"))]
    FamilySpecific,
    /// Curve-agnostic EdDSA spec
    #[cfg_attr(feature = "serde-support", serde(rename = "generic-spec"))]
    Generic,
}

impl SpecShape {
    /// Capability tag for this shape
    pub fn tag(&self) -> &'static str {
        match self {
            SpecShape::FamilySpecific => "family-specific-spec",
            SpecShape::Generic => "generic-spec",
        }
    }
}

impl fmt::Display for SpecShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
