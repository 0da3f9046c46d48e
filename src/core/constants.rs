/*!
Constants for EdDSA key construction.

Key sizes, coordinate widths and the canonical algorithm identifiers.
*/

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Size constants per curve
pub mod sizes {
    /// Ed25519 constants
    pub mod ed25519 {
        /// Size of an encoded Ed25519 public key in bytes
        pub const PUBLIC_KEY_BYTES: usize = 32;

        /// Bits available to the y coordinate; the top bit carries the sign of x
        pub const COORDINATE_BITS: usize = 255;

        /// Field prime 2^255 - 19, little-endian
        pub const FIELD_PRIME_LE: [u8; PUBLIC_KEY_BYTES] = {
            let mut p = [0xffu8; PUBLIC_KEY_BYTES];
            p[0] = 0xed;
            p[PUBLIC_KEY_BYTES - 1] = 0x7f;
            p
        };
    }

    /// Ed448 constants
    pub mod ed448 {
        /// Size of an encoded Ed448 public key in bytes
        pub const PUBLIC_KEY_BYTES: usize = 57;

        /// Bits available to the y coordinate; the last octet only carries the sign of x
        pub const COORDINATE_BITS: usize = 448;

        /// Field prime 2^448 - 2^224 - 1, little-endian
        pub const FIELD_PRIME_LE: [u8; PUBLIC_KEY_BYTES] = {
            let mut p = [0xffu8; PUBLIC_KEY_BYTES];
            p[28] = 0xfe;
            p[PUBLIC_KEY_BYTES - 1] = 0x00;
            p
        };
    }
}

/// Algorithm identifiers understood by the bundled provider presets
pub mod identifiers {
    /// Curve-agnostic EdDSA identifier
    pub const EDDSA: &str = "EdDSA";

    /// Ed25519 identifier
    pub const ED25519: &str = "Ed25519";

    /// Ed448 identifier
    pub const ED448: &str = "Ed448";
}

/// Bit mask of the x sign bit in the last octet of an encoded point
pub const SIGN_BIT_MASK: u8 = 0x80;
