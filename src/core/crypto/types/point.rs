/*!
Edwards curve points in compressed form.

A compressed point is the y coordinate plus the parity of x. The coordinate
is an arbitrary-precision unsigned integer; it is only checked against a
curve once it becomes part of a [`PublicKeySpec`](super::PublicKeySpec).
*/

use std::cmp::Ordering;
use std::fmt;

/// Arbitrary-precision unsigned integer, stored little-endian without high zero octets
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    le: Vec<u8>,
}

impl Coordinate {
    /// The value zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Decode a little-endian byte string of any length
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let mut le = bytes.to_vec();
        while le.last() == Some(&0) {
            le.pop();
        }
        Self { le }
    }

    /// Decode a big-endian byte string of any length
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let le: Vec<u8> = bytes.iter().rev().copied().collect();
        Self::from_le_bytes(&le)
    }

    /// Minimal little-endian encoding; empty for zero
    pub fn as_le_bytes(&self) -> &[u8] {
        &self.le
    }

    /// Minimal big-endian encoding; empty for zero
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.le.iter().rev().copied().collect()
    }

    /// Little-endian encoding zero-padded to `len` bytes, or `None` if it does not fit
    pub fn to_le_bytes_padded(&self, len: usize) -> Option<Vec<u8>> {
        if self.le.len() > len {
            return None;
        }
        let mut out = self.le.clone();
        out.resize(len, 0);
        Some(out)
    }

    /// Number of significant bits
    pub fn bits(&self) -> usize {
        match self.le.last() {
            None => 0,
            Some(&top) => (self.le.len() - 1) * 8 + (8 - top.leading_zeros() as usize),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.le.is_empty()
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.le
            .len()
            .cmp(&other.le.len())
            .then_with(|| self.le.iter().rev().cmp(other.le.iter().rev()))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate(0x")?;
        if self.le.is_empty() {
            write!(f, "0")?;
        }
        for byte in self.le.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

/// Compressed Edwards point: y coordinate plus the sign (parity) of x
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdPoint {
    x_odd: bool,
    y: Coordinate,
}

impl EdPoint {
    /// Create a point from the x sign bit and the y coordinate
    pub fn new(x_odd: bool, y: Coordinate) -> Self {
        Self { x_odd, y }
    }

    /// Create a point from the x sign bit and little-endian y bytes
    pub fn from_le_bytes(x_odd: bool, y: &[u8]) -> Self {
        Self::new(x_odd, Coordinate::from_le_bytes(y))
    }

    /// Whether x is odd
    pub fn is_x_odd(&self) -> bool {
        self.x_odd
    }

    /// The y coordinate
    pub fn y(&self) -> &Coordinate {
        &self.y
    }
}
