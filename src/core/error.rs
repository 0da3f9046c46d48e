/*!
Error handling for provider resolution and key construction.

Every failure names its cause: a missing provider, a provider that claims
the algorithm but rejects the input shape, a duplicate registration, or a
malformed point. Callers branch on [`Error::kind`] rather than on messages.
*/

use thiserror::Error;

use crate::core::crypto::types::{CurveFamily, SpecShape};

/// Result type for registry and key factory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for registry and key factory operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A provider with this name is already installed
    #[error("Provider already installed: {0}")]
    DuplicateProviderName(String),

    /// No installed provider declares the algorithm identifier
    #[error("No installed provider supports algorithm {0}")]
    NoProviderSupportsAlgorithm(String),

    /// The first provider claiming the algorithm does not accept the spec shape
    #[error("Provider {provider} supports {algorithm} but rejects {shape} key specs")]
    SpecShapeRejected {
        provider: String,
        algorithm: String,
        shape: SpecShape,
    },

    /// The point does not encode a valid coordinate for its curve
    #[error("Malformed point: {0}")]
    MalformedPoint(#[from] PointError),

    /// A registry configuration failed validation
    #[error("Invalid registry configuration: {0}")]
    InvalidConfig(String),
}

/// Details of a point that failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    /// Raw coordinate bytes of the wrong size for the curve
    #[error("{family} coordinates are {expected} bytes, got {actual}")]
    InvalidLength {
        family: CurveFamily,
        expected: usize,
        actual: usize,
    },

    /// Coordinate does not fit the curve's bit width
    #[error("{family} coordinate is {bits} bits wide, at most {max_bits} allowed")]
    CoordinateTooWide {
        family: CurveFamily,
        bits: usize,
        max_bits: usize,
    },

    /// Coordinate is not reduced modulo the field prime
    #[error("{family} coordinate is not below the field prime")]
    NonCanonicalCoordinate { family: CurveFamily },

    /// Curve name does not match any supported family
    #[error("Unknown curve: {0}")]
    UnknownCurve(String),
}

/// Fieldless discriminant of [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateProviderName,
    NoProviderSupportsAlgorithm,
    SpecShapeRejected,
    MalformedPoint,
    InvalidConfig,
}

impl Error {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DuplicateProviderName(_) => ErrorKind::DuplicateProviderName,
            Error::NoProviderSupportsAlgorithm(_) => ErrorKind::NoProviderSupportsAlgorithm,
            Error::SpecShapeRejected { .. } => ErrorKind::SpecShapeRejected,
            Error::MalformedPoint(_) => ErrorKind::MalformedPoint,
            Error::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }

    /// Name of the provider responsible for this error, if any
    pub fn provider(&self) -> Option<&str> {
        match self {
            Error::DuplicateProviderName(name) => Some(name),
            Error::SpecShapeRejected { provider, .. } => Some(provider),
            _ => None,
        }
    }
}

/// Create a malformed point error
#[macro_export]
macro_rules! malformed_point_err {
    ($err:expr) => {
        Err($crate::core::error::Error::MalformedPoint($err))
    };
}

/// Create an invalid configuration error
#[macro_export]
macro_rules! invalid_config_err {
    ($msg:expr) => {
        Err($crate::core::error::Error::InvalidConfig($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::core::error::Error::InvalidConfig(format!($fmt, $($arg)*)))
    };
}
