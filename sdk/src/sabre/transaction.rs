//! Sabre transactions.
//!
//! [`SabreTransactionBuilder`] pairs a payload source with a generic
//! [`TransactionBuilder`]. The generic builder supplies addressing,
//! dependencies, nonce and batcher key; the family is always
//! `sabre`/`0.4` and the payload is always the encoded [`SabrePayload`].

use std::fmt;

use super::builder::BuildPayload;
use super::payload::SabrePayload;
use crate::config::{SABRE_FAMILY_NAME, SABRE_FAMILY_VERSION};
use crate::crypto::signing::Signer;
use crate::error::BuildError;
use crate::protos::Transaction;
use crate::transaction::builder::{sign_transaction, BuildTransaction, TransactionBuilder};

/// Builds signed Sabre transactions.
///
/// Family name, family version and payload set on the inner
/// [`TransactionBuilder`] are ignored. Inputs and outputs are not required
/// here; [`SabrePayload::state_addresses`] derives the usual set.
#[derive(Default)]
pub struct SabreTransactionBuilder {
    payload_builder: Option<Box<dyn BuildPayload>>,
    transaction_builder: Option<TransactionBuilder>,
}

impl SabreTransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The payload to wrap: a [`SabrePayloadBuilder`](super::SabrePayloadBuilder)
    /// or an already built [`SabrePayload`].
    pub fn with_payload_builder(mut self, payload_builder: impl BuildPayload + 'static) -> Self {
        self.payload_builder = Some(Box::new(payload_builder));
        self
    }

    pub fn with_transaction_builder(mut self, transaction_builder: TransactionBuilder) -> Self {
        self.transaction_builder = Some(transaction_builder);
        self
    }

    pub fn payload_builder(&self) -> Option<&dyn BuildPayload> {
        self.payload_builder.as_deref()
    }

    pub fn transaction_builder(&self) -> Option<&TransactionBuilder> {
        self.transaction_builder.as_ref()
    }
}

impl fmt::Debug for SabreTransactionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SabreTransactionBuilder")
            .field("payload_builder", &self.payload_builder.is_some())
            .field("transaction_builder", &self.transaction_builder)
            .finish()
    }
}

impl BuildTransaction for SabreTransactionBuilder {
    /// # Errors
    ///
    /// [`BuildError::MissingField`] naming `"payload builder"` or
    /// `"transaction builder"` when either is unset, or whatever the payload
    /// build reports. Nothing is signed on failure.
    fn build(&self, signer: &dyn Signer) -> Result<Transaction, BuildError> {
        let payload_builder = self
            .payload_builder
            .as_deref()
            .ok_or(BuildError::MissingField("payload builder"))?;
        let transaction_builder = self
            .transaction_builder
            .as_ref()
            .ok_or(BuildError::MissingField("transaction builder"))?;

        let payload: SabrePayload = payload_builder.build_payload()?;
        let payload_bytes = payload.to_bytes()?;
        tracing::trace!(action = %payload.action(), bytes = payload_bytes.len(), "payload encoded");

        let header = transaction_builder.header_for(
            SABRE_FAMILY_NAME,
            SABRE_FAMILY_VERSION,
            &payload_bytes,
            signer,
        );
        sign_transaction(&header, payload_bytes, signer)
    }
}
