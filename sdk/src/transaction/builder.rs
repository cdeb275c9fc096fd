//! Transaction construction via the builder pattern.
//!
//! [`TransactionBuilder`] collects header fields and payload bytes; `build`
//! assembles the [`TransactionHeader`], serializes it, and has the
//! [`Signer`] sign those exact bytes. The hex signature becomes both the
//! header signature and the transaction id.
//!
//! Every check runs before anything is signed, so a failed build never
//! reaches the signer.

use rand::RngCore;

use crate::config::NONCE_LENGTH;
use crate::crypto::hash::sha512_hex;
use crate::crypto::signing::Signer;
use crate::error::BuildError;
use crate::protos::{self, Transaction, TransactionHeader};

/// Something that turns its configuration into a signed [`Transaction`].
///
/// Implemented by the generic [`TransactionBuilder`] and by
/// [`SabreTransactionBuilder`](crate::sabre::SabreTransactionBuilder),
/// which composes one.
pub trait BuildTransaction {
    fn build(&self, signer: &dyn Signer) -> Result<Transaction, BuildError>;
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for signed [`Transaction`] instances of any family.
///
/// # Usage
///
/// ```rust
/// use transact_sdk::crypto::{Ed25519PrivateKey, Ed25519Signer};
/// use transact_sdk::transaction::{BuildTransaction, TransactionBuilder};
///
/// let signer = Ed25519Signer::new(Ed25519PrivateKey::generate());
/// let txn = TransactionBuilder::new()
///     .with_family_name("intkey")
///     .with_family_version("1.0")
///     .with_inputs(["1cf126"])
///     .with_outputs(["1cf126"])
///     .with_payload(b"set a 1".to_vec())
///     .build(&signer)
///     .unwrap();
/// assert_eq!(txn.header_signature.len(), 128);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionBuilder {
    batcher_public_key: Option<String>,
    dependencies: Vec<String>,
    family_name: String,
    family_version: String,
    inputs: Vec<String>,
    outputs: Vec<String>,
    nonce: Option<String>,
    payload: Vec<u8>,
}

fn strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Setters ----

    /// Hex public key written to the header in place of the signer's own.
    ///
    /// It fills both `signer_public_key` and `batcher_public_key`, while the
    /// header is still signed by the [`Signer`] passed to `build`. Unless
    /// that signer holds this key, the transaction will not pass
    /// [`verify_transaction`](super::verify_transaction) or a node's
    /// signature check.
    pub fn with_batcher_public_key(mut self, key: impl Into<String>) -> Self {
        self.batcher_public_key = Some(key.into());
        self
    }

    /// Ids of transactions that must be committed before this one.
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = strings(dependencies);
        self
    }

    pub fn with_family_name(mut self, name: impl Into<String>) -> Self {
        self.family_name = name.into();
        self
    }

    pub fn with_family_version(mut self, version: impl Into<String>) -> Self {
        self.family_version = version.into();
        self
    }

    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs = strings(inputs);
        self
    }

    pub fn with_outputs<I, S>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outputs = strings(outputs);
        self
    }

    /// Fixes the nonce. Without one, each build draws a fresh random nonce.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }

    // ---- Getters ----

    pub fn batcher_public_key(&self) -> Option<&str> {
        self.batcher_public_key.as_deref()
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn family_version(&self) -> &str {
        &self.family_version
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    // ---- Assembly ----

    /// Header for `payload` under the given family, using this builder's
    /// addressing, dependencies, nonce and batcher key.
    ///
    /// The resolved key (batcher key if configured, else the signer's) is
    /// written as both signer and batcher key.
    pub(crate) fn header_for(
        &self,
        family_name: &str,
        family_version: &str,
        payload: &[u8],
        signer: &dyn Signer,
    ) -> TransactionHeader {
        let public_key = self
            .batcher_public_key
            .clone()
            .unwrap_or_else(|| signer.public_key().as_hex());

        TransactionHeader {
            batcher_public_key: public_key.clone(),
            dependencies: self.dependencies.clone(),
            family_name: family_name.to_string(),
            family_version: family_version.to_string(),
            inputs: self.inputs.clone(),
            nonce: self.nonce.clone().unwrap_or_else(random_nonce),
            outputs: self.outputs.clone(),
            payload_sha512: sha512_hex(payload),
            signer_public_key: public_key,
        }
    }
}

impl BuildTransaction for TransactionBuilder {
    /// # Errors
    ///
    /// [`BuildError::MissingField`] for the first empty field among family
    /// name, family version, inputs, outputs and payload.
    fn build(&self, signer: &dyn Signer) -> Result<Transaction, BuildError> {
        if self.family_name.is_empty() {
            return Err(BuildError::MissingField("family name"));
        }
        if self.family_version.is_empty() {
            return Err(BuildError::MissingField("family version"));
        }
        if self.inputs.is_empty() {
            return Err(BuildError::MissingField("inputs"));
        }
        if self.outputs.is_empty() {
            return Err(BuildError::MissingField("outputs"));
        }
        if self.payload.is_empty() {
            return Err(BuildError::MissingField("payload"));
        }

        let header = self.header_for(
            &self.family_name,
            &self.family_version,
            &self.payload,
            signer,
        );
        sign_transaction(&header, self.payload.clone(), signer)
    }
}

/// Serializes `header`, signs the bytes, and wraps them with `payload`.
pub(crate) fn sign_transaction(
    header: &TransactionHeader,
    payload: Vec<u8>,
    signer: &dyn Signer,
) -> Result<Transaction, BuildError> {
    let header_bytes = protos::encode(header)?;
    let signature = signer.sign(&header_bytes)?;

    let txn = Transaction {
        header: header_bytes,
        header_signature: signature.as_hex(),
        payload,
    };
    tracing::debug!(
        id = %txn.header_signature,
        family = %header.family_name,
        inputs = header.inputs.len(),
        outputs = header.outputs.len(),
        "transaction built"
    );
    Ok(txn)
}

/// A fresh hex nonce from the thread-local CSPRNG.
fn random_nonce() -> String {
    let mut bytes = [0u8; NONCE_LENGTH];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
