//! # State Addressing
//!
//! Pure functions that map names to the 70-hex-character global state
//! addresses a Sabre node reads and writes. Each address is a fixed
//! 6-character namespace prefix followed by a truncated SHA-512 hex digest,
//! so the same inputs always give the same address.
//!
//! ```text
//! 00ec00 | sha512(namespace[..6])[..64]        namespace registry
//! 00ec01 | sha512(name)[..64]                  contract registry
//! 00ec02 | sha512(name + "," + version)[..64]  contract
//! 00ec03 | sha512(org)[..6] | sha512(name)[..58]  smart permission
//! cad11d | 01 | sha512(org)[..62]              pike organization
//! 000000 | sha256(part)[..16] x 4              setting
//! ```

use thiserror::Error;

use crate::config::{
    ADDRESS_HASH_LENGTH, CONTRACT_PREFIX, CONTRACT_REGISTRY_PREFIX, NAMESPACE_REGISTRY_PREFIX,
    PIKE_ORG_NAMESPACE, PIKE_PREFIX, PREFIX_LENGTH, SETTINGS_KEY_PARTS, SETTINGS_PART_LENGTH,
    SETTINGS_PREFIX, SMART_PERMISSION_PREFIX,
};
use crate::crypto::hash::{sha256_hex, sha512_hex};

/// Errors raised when an address cannot be derived from its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Namespace registries are keyed by the first six bytes of the
    /// namespace. A namespace shorter than that, or one whose sixth byte
    /// falls inside a multi-byte character, has no registry address.
    #[error("namespace {namespace:?} has no 6-byte prefix on a character boundary")]
    InvalidNamespacePrefix { namespace: String },
}

/// Hex SHA-512 of `input`, truncated to `len` characters.
fn hash_prefix(input: &str, len: usize) -> String {
    let mut digest = sha512_hex(input.as_bytes());
    digest.truncate(len);
    digest
}

/// Address of the namespace registry that governs `namespace`.
///
/// Only the first six bytes of the namespace take part, which is what
/// lets a single registry cover every address under a prefix. Namespaces
/// are hex in practice, where bytes and characters coincide.
pub fn compute_namespace_registry_address(namespace: &str) -> Result<String, AddressError> {
    let prefix = namespace
        .get(..PREFIX_LENGTH)
        .ok_or_else(|| AddressError::InvalidNamespacePrefix {
            namespace: namespace.to_string(),
        })?;
    Ok(format!(
        "{}{}",
        NAMESPACE_REGISTRY_PREFIX,
        hash_prefix(prefix, ADDRESS_HASH_LENGTH)
    ))
}

/// Address where version `version` of contract `name` is stored.
pub fn compute_contract_address(name: &str, version: &str) -> String {
    let input = format!("{},{}", name, version);
    format!(
        "{}{}",
        CONTRACT_PREFIX,
        hash_prefix(&input, ADDRESS_HASH_LENGTH)
    )
}

/// Address of the registry record (owners, versions) for contract `name`.
pub fn compute_contract_registry_address(name: &str) -> String {
    format!(
        "{}{}",
        CONTRACT_REGISTRY_PREFIX,
        hash_prefix(name, ADDRESS_HASH_LENGTH)
    )
}

/// The six-character state prefix a contract named `contract_name` writes
/// under. Not an address on its own.
pub fn compute_contract_prefix(contract_name: &str) -> String {
    hash_prefix(contract_name, PREFIX_LENGTH)
}

/// Address of a record `key` owned by the contract `contract_name`.
///
/// This is how deployed contracts lay out their own state: the XO contract
/// stores game `g` at `compute_deployment_address("xo", g)`.
pub fn compute_deployment_address(contract_name: &str, key: &str) -> String {
    format!(
        "{}{}",
        compute_contract_prefix(contract_name),
        hash_prefix(key, ADDRESS_HASH_LENGTH)
    )
}

/// Address of smart permission `name` belonging to organization `org_id`.
pub fn compute_smart_permission_address(org_id: &str, name: &str) -> String {
    format!(
        "{}{}{}",
        SMART_PERMISSION_PREFIX,
        hash_prefix(org_id, PREFIX_LENGTH),
        hash_prefix(name, ADDRESS_HASH_LENGTH - PREFIX_LENGTH)
    )
}

/// Address of the Pike organization record for `org_id`.
pub fn compute_org_address(org_id: &str) -> String {
    format!(
        "{}{}{}",
        PIKE_PREFIX,
        PIKE_ORG_NAMESPACE,
        hash_prefix(org_id, ADDRESS_HASH_LENGTH - PIKE_ORG_NAMESPACE.len())
    )
}

/// Address of the on-chain setting `key`.
///
/// The key is split on `.` into at most four parts (the last part keeps
/// any remaining dots), padded with empty parts, and each part contributes
/// the first 16 hex characters of its SHA-256.
pub fn compute_setting_address(key: &str) -> String {
    let mut parts: Vec<&str> = key.splitn(SETTINGS_KEY_PARTS, '.').collect();
    parts.resize(SETTINGS_KEY_PARTS, "");

    let mut address = String::from(SETTINGS_PREFIX);
    for part in parts {
        address.push_str(&sha256_hex(part.as_bytes())[..SETTINGS_PART_LENGTH]);
    }
    address
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ADDRESS_LENGTH, ADMINISTRATORS_SETTING_KEY};

    fn is_hex(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn contract_address_is_deterministic() {
        let a = compute_contract_address("xo", "0.3.3");
        let b = compute_contract_address("xo", "0.3.3");
        assert_eq!(a, b);
    }

    #[test]
    fn contract_address_layout() {
        let addr = compute_contract_address("xo", "0.3.3");
        assert_eq!(addr.len(), ADDRESS_LENGTH);
        assert!(addr.starts_with(CONTRACT_PREFIX));
        assert!(is_hex(&addr));
        assert_eq!(&addr[6..], &sha512_hex(b"xo,0.3.3")[..64]);
    }

    #[test]
    fn different_name_or_version_different_address() {
        let base = compute_contract_address("xo", "0.3.3");
        assert_ne!(base, compute_contract_address("xo", "0.3.4"));
        assert_ne!(base, compute_contract_address("intkey", "0.3.3"));
        assert_ne!(
            compute_contract_address("ab", "c"),
            compute_contract_address("a", "bc")
        );
    }

    #[test]
    fn contract_registry_address_layout() {
        let addr = compute_contract_registry_address("xo");
        assert_eq!(addr.len(), ADDRESS_LENGTH);
        assert!(addr.starts_with(CONTRACT_REGISTRY_PREFIX));
        assert_eq!(&addr[6..], &sha512_hex(b"xo")[..64]);
    }

    #[test]
    fn namespace_registry_uses_first_six_chars() {
        let a = compute_namespace_registry_address("5b7349").unwrap();
        let b = compute_namespace_registry_address("5b7349deadbeef").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), ADDRESS_LENGTH);
        assert!(a.starts_with(NAMESPACE_REGISTRY_PREFIX));
        assert_eq!(&a[6..], &sha512_hex(b"5b7349")[..64]);
    }

    #[test]
    fn test_short_namespace_rejected() {
        let err = compute_namespace_registry_address("abc").unwrap_err();
        assert_eq!(
            err,
            AddressError::InvalidNamespacePrefix {
                namespace: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_split_character_at_prefix_end_rejected() {
        // 'é' spans bytes 5 and 6.
        let err = compute_namespace_registry_address("abcdeé12").unwrap_err();
        assert_eq!(
            err,
            AddressError::InvalidNamespacePrefix {
                namespace: "abcdeé12".to_string()
            }
        );

        // 'é' spans bytes 4 and 5, so the prefix is "abcdé".
        assert_eq!(
            compute_namespace_registry_address("abcdé12").unwrap(),
            format!("{}{}", NAMESPACE_REGISTRY_PREFIX, &sha512_hex("abcdé".as_bytes())[..64])
        );
    }

    #[test]
    fn contract_prefix_is_six_chars() {
        assert_eq!(compute_contract_prefix("xo"), "5b7349");
        assert_eq!(compute_contract_prefix("intkey").len(), 6);
    }

    #[test]
    fn deployment_address_lives_under_contract_prefix() {
        let addr = compute_deployment_address("xo", "game1");
        assert_eq!(addr.len(), ADDRESS_LENGTH);
        assert!(addr.starts_with("5b7349"));
        assert_eq!(&addr[6..], &sha512_hex(b"game1")[..64]);
    }

    #[test]
    fn smart_permission_address_layout() {
        let addr = compute_smart_permission_address("acme", "can_ship");
        assert_eq!(addr.len(), ADDRESS_LENGTH);
        assert!(addr.starts_with(SMART_PERMISSION_PREFIX));
        assert_eq!(&addr[6..12], &sha512_hex(b"acme")[..6]);
        assert_eq!(&addr[12..], &sha512_hex(b"can_ship")[..58]);
    }

    #[test]
    fn org_address_layout() {
        let addr = compute_org_address("acme");
        assert_eq!(addr.len(), ADDRESS_LENGTH);
        assert!(addr.starts_with("cad11d01"));
        assert_eq!(&addr[8..], &sha512_hex(b"acme")[..62]);
    }

    #[test]
    fn setting_address_layout() {
        let addr = compute_setting_address(ADMINISTRATORS_SETTING_KEY);
        assert_eq!(addr.len(), ADDRESS_LENGTH);
        assert!(addr.starts_with(SETTINGS_PREFIX));
        assert_eq!(&addr[6..22], &sha256_hex(b"sawtooth")[..16]);
        assert_eq!(&addr[22..38], &sha256_hex(b"swa")[..16]);
        assert_eq!(&addr[38..54], &sha256_hex(b"administrators")[..16]);
        assert_eq!(&addr[54..], &sha256_hex(b"")[..16]);
    }

    #[test]
    fn setting_address_keeps_extra_dots_in_last_part() {
        let addr = compute_setting_address("a.b.c.d.e");
        assert_eq!(&addr[54..], &sha256_hex(b"d.e")[..16]);
    }
}
