//! Private and public key types and the derivation pipeline.
//!
//! Scalar multiplication is delegated to `x25519-dalek`; this module only
//! parses input, applies the WireGuard clamp and encodes the result.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::clamp::{clamp, is_clamped};

/// Length in bytes of both private and public keys.
pub const KEY_LEN: usize = 32;

/// Error type for key parsing and derivation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeyError {
    #[error("missing private key argument")]
    MissingArgument,
    #[error("error decoding private key hex: {0}")]
    HexDecode(#[from] hex::FromHexError),
    #[error("private key must be {expected} bytes ({} hex characters), got {got} bytes", .expected * 2)]
    InvalidKeyLength { expected: usize, got: usize },
}

/// A 32-byte Curve25519 private key.
///
/// The bytes are zeroized when the key is dropped and never appear in
/// `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; KEY_LEN]);

impl PrivateKey {
    /// Wrap raw key bytes. No clamping is applied.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a hex-encoded private key.
    ///
    /// Hex decoding is checked before length, so an odd-length string is a
    /// [`KeyError::HexDecode`] even when it is one digit short of 64.
    pub fn from_hex(input: &str) -> Result<Self, KeyError> {
        let mut decoded = hex::decode(input)?;
        let key = Self::try_from(decoded.as_slice());
        decoded.zeroize();
        key
    }

    /// Apply the WireGuard clamp to this key in place.
    pub fn clamp(&mut self) {
        clamp(&mut self.0);
    }

    /// Whether the key bytes are already clamped.
    pub fn is_clamped(&self) -> bool {
        is_clamped(&self.0)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Compute the matching public key.
    ///
    /// The scalar is clamped first, so this gives the same result whether or
    /// not [`PrivateKey::clamp`] was called.
    pub fn public_key(&self) -> PublicKey {
        derive_public_key(&self.0)
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = KeyError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; KEY_LEN] = bytes.try_into().map_err(|_| KeyError::InvalidKeyLength {
            expected: KEY_LEN,
            got: bytes.len(),
        })?;
        Ok(Self(array))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// A 32-byte Curve25519 public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; KEY_LEN]);

impl PublicKey {
    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Standard padded base64, 44 characters.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Clamp `scalar` and multiply the Curve25519 base point by it.
///
/// Total and deterministic for every 32-byte input.
pub fn derive_public_key(scalar: &[u8; KEY_LEN]) -> PublicKey {
    let mut clamped = *scalar;
    clamp(&mut clamped);
    // StaticSecret zeroizes itself on drop
    let secret = StaticSecret::from(clamped);
    clamped.zeroize();
    PublicKey(X25519PublicKey::from(&secret).to_bytes())
}

/// Full pipeline: decode hex, check length, clamp, multiply.
///
/// # Example
///
/// ```rust
/// use wgkey_crypto::derive_public_key_hex;
///
/// let public = derive_public_key_hex(
///     "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a",
/// ).unwrap();
/// assert_eq!(public.to_base64(), "hSDwCYkwp1R0i33ctD73Wg2/Og0mOBr066SpjqqbTmo=");
/// ```
pub fn derive_public_key_hex(input: &str) -> Result<PublicKey, KeyError> {
    let mut key = PrivateKey::from_hex(input)?;
    key.clamp();
    Ok(key.public_key())
}
