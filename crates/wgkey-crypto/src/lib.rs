#![forbid(unsafe_code)]

//! WireGuard key handling: private key parsing, scalar clamping and
//! Curve25519 base-point multiplication.

pub mod clamp;
pub mod keys;


pub use clamp::{clamp, is_clamped};
pub use keys::{derive_public_key, derive_public_key_hex, KeyError, PrivateKey, PublicKey, KEY_LEN};
