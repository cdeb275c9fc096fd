//! Error type shared by every builder in the crate.
//!
//! A build either returns a finished artifact or a [`BuildError`]; nothing
//! is ever half-built. None of these errors are transient, so retrying the
//! same build without changing its inputs fails the same way.

use thiserror::Error;

use crate::addressing::AddressError;
use crate::crypto::signing::SigningError;

/// Errors that can occur while building payloads, transactions or batches.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A field required by the requested build was not set or was empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// An action value that does not map to any known Sabre action.
    #[error("unrecognized action: {0}")]
    UnrecognizedAction(i32),

    /// A structured value could not be encoded into its wire form.
    #[error("serialization failed: {0}")]
    Encoding(#[from] prost::EncodeError),

    /// Bytes could not be decoded back into a structured value.
    #[error("deserialization failed: {0}")]
    Decoding(#[from] prost::DecodeError),

    /// A wire payload whose populated field disagrees with its action.
    #[error("payload for action {action} does not carry a {action} body")]
    MismatchedPayload {
        /// The action the payload claims to carry.
        action: &'static str,
    },

    /// A state address could not be derived from the configured fields.
    #[error("invalid address input: {0}")]
    InvalidAddress(#[from] AddressError),

    /// The signer refused or failed to sign the header bytes.
    #[error("signing failed: {0}")]
    Signing(#[from] SigningError),
}
