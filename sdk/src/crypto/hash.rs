//! # Hashing Utilities
//!
//! The two digests the ledger protocol relies on, both returned as
//! lowercase hex because that is how they appear in headers and addresses:
//!
//! - **SHA-512** — `payload_sha512` in transaction headers, and the source
//!   of every Sabre and Pike state address.
//! - **SHA-256** — only used to derive on-chain settings addresses.
//!
//! Callers truncate the hex strings to whatever length they need; a
//! truncated hex digest is still a prefix of the full one.

use sha2::{Digest, Sha256, Sha512};

/// Compute the SHA-512 digest of `data`.
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// Compute the SHA-512 digest of `data` as 128 lowercase hex characters.
///
/// # Example
///
/// ```
/// use transact_sdk::crypto::sha512_hex;
///
/// let digest = sha512_hex(b"xo");
/// assert_eq!(digest.len(), 128);
/// assert_eq!(&digest[..6], "5b7349");
/// ```
pub fn sha512_hex(data: &[u8]) -> String {
    hex::encode(sha512(data))
}

/// Compute the SHA-256 digest of `data` as 64 lowercase hex characters.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha512_known_vector() {
        let expected = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                        47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";
        assert_eq!(sha512_hex(b""), expected);
    }

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha512_hex_matches_raw_digest() {
        let raw = sha512(b"payload bytes");
        assert_eq!(sha512_hex(b"payload bytes"), hex::encode(raw));
    }

    #[test]
    fn sha512_hex_is_lowercase() {
        let digest = sha512_hex(b"Sabre");
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_xo_family_prefix() {
        // The XO family has always lived under the first six hex chars of
        // sha512("xo").
        assert_eq!(&sha512_hex(b"xo")[..6], "5b7349");
    }
}
