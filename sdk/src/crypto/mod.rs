//! # Cryptographic Collaborators
//!
//! The builders need exactly two things from cryptography: a digest for
//! payload hashes and addresses, and something that signs header bytes.
//! Both are thin wrappers around audited crates (`sha2`, `ed25519-dalek`).
//!
//! - [`hash`] — SHA-512 / SHA-256 hex digests.
//! - [`keys`] — algorithm-agnostic public keys and signatures, plus an
//!   Ed25519 private key.
//! - [`signing`] — the [`Signer`] capability the builders sign through.

pub mod hash;
pub mod keys;
pub mod signing;

pub use hash::{sha256_hex, sha512, sha512_hex};
pub use keys::{Ed25519PrivateKey, KeyError, PublicKey, Signature};
pub use signing::{verify, Ed25519Signer, Signer, SigningError};
