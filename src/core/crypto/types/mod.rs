/*!
Core types for EdDSA key construction.

Curve families, compressed points, key specs and the handles built from
them.
*/

pub mod algorithms;
pub mod keyspec;
pub mod point;

// Re-export core types for easier access
pub use algorithms::{CurveFamily, SpecShape};
pub use keyspec::{KeySpec, PublicKeyHandle, PublicKeySpec};
pub use point::{Coordinate, EdPoint};
