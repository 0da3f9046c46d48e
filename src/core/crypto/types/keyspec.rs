/*!
Public key specifications and the handles built from them.
*/

use crate::core::constants::SIGN_BIT_MASK;
use crate::core::crypto::types::algorithms::{CurveFamily, SpecShape};
use crate::core::crypto::types::point::EdPoint;
use crate::core::error::{PointError, Result};
use crate::malformed_point_err;

/// A compressed point bound to a curve family
///
/// Construction checks that the coordinate fits the family, so every
/// `PublicKeySpec` in existence is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKeySpec {
    family: CurveFamily,
    point: EdPoint,
}

impl PublicKeySpec {
    /// Bind a point to a curve family
    pub fn new(family: CurveFamily, point: EdPoint) -> Result<Self> {
        let bits = point.y().bits();
        if bits > family.coordinate_bits() {
            return malformed_point_err!(PointError::CoordinateTooWide {
                family,
                bits,
                max_bits: family.coordinate_bits(),
            });
        }
        if point.y() >= &family.field_prime() {
            return malformed_point_err!(PointError::NonCanonicalCoordinate { family });
        }
        Ok(Self { family, point })
    }

    /// Build a spec from a sign bit and a raw little-endian coordinate
    ///
    /// The coordinate must be exactly [`CurveFamily::key_length`] bytes.
    pub fn from_raw(family: CurveFamily, x_odd: bool, y: &[u8]) -> Result<Self> {
        check_length(family, y)?;
        Self::new(family, EdPoint::from_le_bytes(x_odd, y))
    }

    /// Decode an RFC 8032 public key encoding
    ///
    /// The sign of x lives in the most significant bit of the last octet.
    pub fn from_encoded(family: CurveFamily, encoded: &[u8]) -> Result<Self> {
        check_length(family, encoded)?;
        let mut y = encoded.to_vec();
        let last = y.len() - 1;
        let x_odd = y[last] & SIGN_BIT_MASK != 0;
        y[last] &= !SIGN_BIT_MASK;
        Self::new(family, EdPoint::from_le_bytes(x_odd, &y))
    }

    /// RFC 8032 public key encoding of this point
    pub fn encode(&self) -> Vec<u8> {
        let len = self.family.key_length();
        let y = self.point.y().as_le_bytes();
        let mut out = vec![0u8; len];
        out[..y.len()].copy_from_slice(y);
        if self.point.is_x_odd() {
            out[len - 1] |= SIGN_BIT_MASK;
        }
        out
    }

    pub fn family(&self) -> CurveFamily {
        self.family
    }

    pub fn point(&self) -> &EdPoint {
        &self.point
    }
}

fn check_length(family: CurveFamily, bytes: &[u8]) -> Result<()> {
    if bytes.len() != family.key_length() {
        return malformed_point_err!(PointError::InvalidLength {
            family,
            expected: family.key_length(),
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// Key construction input as handed to a key factory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySpec {
    /// Spec tied to a named curve family
    FamilySpecific(PublicKeySpec),
    /// Curve-agnostic EdDSA spec wrapping the same point
    Generic(PublicKeySpec),
}

impl KeySpec {
    /// Wrap a spec in the family-specific shape
    pub fn family_specific(spec: PublicKeySpec) -> Self {
        KeySpec::FamilySpecific(spec)
    }

    /// Wrap a spec in the generic shape
    pub fn generic(spec: PublicKeySpec) -> Self {
        KeySpec::Generic(spec)
    }

    /// Get the shape of this spec
    pub fn shape(&self) -> SpecShape {
        match self {
            KeySpec::FamilySpecific(_) => SpecShape::FamilySpecific,
            KeySpec::Generic(_) => SpecShape::Generic,
        }
    }

    /// The wrapped point and family
    pub fn public_key_spec(&self) -> &PublicKeySpec {
        match self {
            KeySpec::FamilySpecific(spec) | KeySpec::Generic(spec) => spec,
        }
    }

    /// Same content, other shape
    pub fn reshape(self, shape: SpecShape) -> Self {
        let spec = match self {
            KeySpec::FamilySpecific(spec) | KeySpec::Generic(spec) => spec,
        };
        match shape {
            SpecShape::FamilySpecific => KeySpec::FamilySpecific(spec),
            SpecShape::Generic => KeySpec::Generic(spec),
        }
    }
}

/// A constructed EdDSA public key
///
/// Carries the family and point it was built from, and the provider that
/// built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyHandle {
    provider: String,
    spec: PublicKeySpec,
}

impl PublicKeyHandle {
    /// Create a handle built by `provider`
    pub fn new(provider: impl Into<String>, spec: PublicKeySpec) -> Self {
        Self {
            provider: provider.into(),
            spec,
        }
    }

    /// Name of the provider that built this key
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// The spec the key was built from
    pub fn spec(&self) -> &PublicKeySpec {
        &self.spec
    }

    pub fn family(&self) -> CurveFamily {
        self.spec.family()
    }

    pub fn point(&self) -> &EdPoint {
        self.spec.point()
    }

    /// RFC 8032 encoding of the key
    pub fn encoded(&self) -> Vec<u8> {
        self.spec.encode()
    }
}
