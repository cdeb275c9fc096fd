//! # Signing Capability
//!
//! Builders never touch private keys. They hand serialized header bytes to
//! a [`Signer`] and write back whatever signature it returns. That keeps
//! the algorithm, key storage and any remote or hardware signing entirely
//! outside the build pipeline.
//!
//! [`Ed25519Signer`] is the bundled implementation, and [`verify`] checks
//! its signatures.

use ed25519_dalek::{Signature as DalekSignature, Verifier, VerifyingKey};
use thiserror::Error;

use super::keys::{Ed25519PrivateKey, PublicKey, Signature};

/// Errors reported by a [`Signer`].
#[derive(Debug, Error)]
pub enum SigningError {
    /// The signer could not produce a signature (remote signer down,
    /// hardware key locked, and so on).
    #[error("signer unavailable: {0}")]
    Unavailable(String),

    /// The signer's key material is unusable.
    #[error("invalid signing key: {0}")]
    InvalidKey(String),
}

/// Something that can sign bytes on behalf of one public key.
///
/// Implementations must be deterministic in the sense that matters for
/// verification: the returned signature has to verify against
/// [`public_key`](Self::public_key) over exactly the bytes passed in.
pub trait Signer {
    /// The public key that verifies this signer's signatures.
    fn public_key(&self) -> PublicKey;

    /// Signs `message`.
    fn sign(&self, message: &[u8]) -> Result<Signature, SigningError>;
}

/// A [`Signer`] backed by an in-memory Ed25519 private key.
#[derive(Debug, Clone)]
pub struct Ed25519Signer {
    private_key: Ed25519PrivateKey,
}

impl Ed25519Signer {
    pub fn new(private_key: Ed25519PrivateKey) -> Self {
        Self { private_key }
    }
}

impl Signer for Ed25519Signer {
    fn public_key(&self) -> PublicKey {
        self.private_key.public_key()
    }

    fn sign(&self, message: &[u8]) -> Result<Signature, SigningError> {
        Ok(self.private_key.sign(message))
    }
}

/// Verifies an Ed25519 signature over `message`.
///
/// Returns `false` for anything that is not a well-formed 32-byte key and
/// 64-byte signature. There is no error detail on purpose.
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    let Ok(key_bytes) = <[u8; 32]>::try_from(public_key.as_bytes()) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_bytes(&key_bytes) else {
        return false;
    };
    let Ok(sig_bytes) = <[u8; 64]>::try_from(signature.as_bytes()) else {
        return false;
    };
    verifying_key
        .verify(message, &DalekSignature::from_bytes(&sig_bytes))
        .is_ok()
}
