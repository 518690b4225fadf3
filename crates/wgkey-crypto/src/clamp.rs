//! Curve25519 private scalar clamping.
//!
//! WireGuard normalizes every private key before use: the scalar is made a
//! multiple of the cofactor (8) and its bit length is fixed at 255 bits with
//! bit 254 set.

use crate::keys::KEY_LEN;

/// Mask applied to the first byte; clears the low 3 bits.
pub const LOW_BYTE_MASK: u8 = 0b1111_1000;
/// Mask applied to the last byte; clears bit 255.
pub const HIGH_BYTE_MASK: u8 = 0b0111_1111;
/// Bit set in the last byte; bit 254 of the scalar.
pub const HIGH_BYTE_BIT: u8 = 0b0100_0000;

/// Clamp a 32-byte scalar in place.
///
/// The transform is bit-exact and idempotent.
///
/// # Example
///
/// ```rust
/// use wgkey_crypto::clamp;
///
/// let mut scalar = [0xffu8; 32];
/// clamp(&mut scalar);
/// assert_eq!(scalar[0], 0xf8);
/// assert_eq!(scalar[31], 0x7f);
/// ```
pub fn clamp(scalar: &mut [u8; KEY_LEN]) {
    scalar[0] &= LOW_BYTE_MASK;
    scalar[KEY_LEN - 1] = (scalar[KEY_LEN - 1] & HIGH_BYTE_MASK) | HIGH_BYTE_BIT;
}

/// Returns `true` if `scalar` is already in clamped form.
pub fn is_clamped(scalar: &[u8; KEY_LEN]) -> bool {
    scalar[0] & !LOW_BYTE_MASK == 0
        && scalar[KEY_LEN - 1] & !HIGH_BYTE_MASK == 0
        && scalar[KEY_LEN - 1] & HIGH_BYTE_BIT == HIGH_BYTE_BIT
}
