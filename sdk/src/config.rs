//! # Protocol Constants
//!
//! Every fixed string the builders and address helpers depend on lives
//! here. These values are dictated by the Sabre transaction family and the
//! global state layout of the ledger, so changing any of them produces
//! transactions that a node will reject.

// ---------------------------------------------------------------------------
// Transaction family
// ---------------------------------------------------------------------------

/// Family name written into the header of every Sabre transaction.
pub const SABRE_FAMILY_NAME: &str = "sabre";

/// Family version of the Sabre transaction processor this crate targets.
pub const SABRE_FAMILY_VERSION: &str = "0.4";

// ---------------------------------------------------------------------------
// Global state prefixes
// ---------------------------------------------------------------------------

/// Namespace registry records.
pub const NAMESPACE_REGISTRY_PREFIX: &str = "00ec00";

/// Contract registry records.
pub const CONTRACT_REGISTRY_PREFIX: &str = "00ec01";

/// Stored contract versions.
pub const CONTRACT_PREFIX: &str = "00ec02";

/// Smart permission functions.
pub const SMART_PERMISSION_PREFIX: &str = "00ec03";

/// Pike (organizations and agents).
pub const PIKE_PREFIX: &str = "cad11d";

/// Pike organization records, appended to [`PIKE_PREFIX`].
pub const PIKE_ORG_NAMESPACE: &str = "01";

/// On-chain settings.
pub const SETTINGS_PREFIX: &str = "000000";

// ---------------------------------------------------------------------------
// Address geometry
// ---------------------------------------------------------------------------

/// Every state address is 35 bytes, i.e. 70 hex characters.
pub const ADDRESS_LENGTH: usize = 70;

/// Length of a namespace or contract prefix, in hex characters.
pub const PREFIX_LENGTH: usize = 6;

/// Length of the hashed suffix that follows a 6-character prefix.
pub const ADDRESS_HASH_LENGTH: usize = ADDRESS_LENGTH - PREFIX_LENGTH;

/// Settings keys are split into at most this many dot-separated parts.
pub const SETTINGS_KEY_PARTS: usize = 4;

/// Each settings key part contributes this many hex characters.
pub const SETTINGS_PART_LENGTH: usize = 16;

/// Setting holding the public keys allowed to administer registries.
pub const ADMINISTRATORS_SETTING_KEY: &str = "sawtooth.swa.administrators";

// ---------------------------------------------------------------------------
// Transaction header
// ---------------------------------------------------------------------------

/// Number of random bytes in a generated nonce (hex-encoded in the header).
pub const NONCE_LENGTH: usize = 16;
