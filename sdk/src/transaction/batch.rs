//! Batch construction.
//!
//! A batch lists its transactions' ids in its signed header, so a node can
//! tell if a transaction was dropped, added or reordered in transit. The
//! ids are the transactions' header signatures, one per transaction, in
//! the order the transactions were given.

use crate::crypto::signing::Signer;
use crate::error::BuildError;
use crate::protos::{self, Batch, BatchHeader, BatchList, Transaction};

/// Fluent builder that signs a list of transactions into a [`BatchList`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchBuilder {
    transactions: Vec<Transaction>,
    trace: bool,
}

impl BatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    /// Asks the receiving node to trace the batch through validation.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn trace(&self) -> bool {
        self.trace
    }

    /// Signs the batch header and wraps the batch in a single-entry
    /// [`BatchList`].
    ///
    /// # Errors
    ///
    /// [`BuildError::MissingField`] naming `"Transactions"` when the
    /// transaction list is empty. Nothing is signed in that case.
    pub fn build_batch_list(&self, signer: &dyn Signer) -> Result<BatchList, BuildError> {
        if self.transactions.is_empty() {
            return Err(BuildError::MissingField("Transactions"));
        }

        let transaction_ids: Vec<String> = self
            .transactions
            .iter()
            .map(|txn| txn.header_signature.clone())
            .collect();

        let header = BatchHeader {
            signer_public_key: signer.public_key().as_hex(),
            transaction_ids,
        };
        let header_bytes = protos::encode(&header)?;
        let signature = signer.sign(&header_bytes)?;

        let batch = Batch {
            header: header_bytes,
            header_signature: signature.as_hex(),
            transactions: self.transactions.clone(),
            trace: self.trace,
        };
        tracing::debug!(
            id = %batch.header_signature,
            transactions = batch.transactions.len(),
            trace = batch.trace,
            "batch built"
        );

        Ok(BatchList {
            batches: vec![batch],
        })
    }

    /// Builds the batch list and encodes it: the exact bytes to submit.
    pub fn build(&self, signer: &dyn Signer) -> Result<Vec<u8>, BuildError> {
        let batch_list = self.build_batch_list(signer)?;
        let bytes = protos::encode(&batch_list)?;
        tracing::trace!(bytes = bytes.len(), "batch list encoded");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::{Ed25519PrivateKey, Signature};
    use crate::crypto::signing::{verify, Ed25519Signer};
    use crate::transaction::builder::{BuildTransaction, TransactionBuilder};

    fn signer() -> Ed25519Signer {
        Ed25519Signer::new(Ed25519PrivateKey::from_seed(&[8u8; 32]))
    }

    fn txn(n: u8) -> Transaction {
        TransactionBuilder::new()
            .with_family_name("intkey")
            .with_family_version("1.0")
            .with_inputs(["1cf126"])
            .with_outputs(["1cf126"])
            .with_payload(vec![n])
            .build(&signer())
            .unwrap()
    }

    #[test]
    fn test_empty_batch_rejected() {
        let err = BatchBuilder::new().build(&signer()).unwrap_err();
        assert!(matches!(err, BuildError::MissingField("Transactions")));
    }

    #[test]
    fn one_id_per_transaction_in_order() {
        let txns: Vec<Transaction> = (1..=3).map(txn).collect();
        let expected: Vec<String> = txns.iter().map(|t| t.header_signature.clone()).collect();

        let list = BatchBuilder::new()
            .with_transactions(txns)
            .build_batch_list(&signer())
            .unwrap();
        let header = list.batches[0].decode_header().unwrap();

        assert_eq!(header.transaction_ids.len(), 3);
        assert_eq!(header.transaction_ids, expected);
        assert!(header.transaction_ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn header_is_signed_by_signer() {
        let signer = signer();
        let list = BatchBuilder::new()
            .with_transactions(vec![txn(1)])
            .build_batch_list(&signer)
            .unwrap();
        let batch = &list.batches[0];
        let header = batch.decode_header().unwrap();

        assert_eq!(header.signer_public_key, signer.public_key().as_hex());
        let sig = Signature::from_hex(&batch.header_signature).unwrap();
        assert!(verify(&signer.public_key(), &batch.header, &sig));
    }

    #[test]
    fn trace_flag_is_carried() {
        let builder = BatchBuilder::new()
            .with_transactions(vec![txn(1)])
            .with_trace(true);
        assert!(builder.trace());
        let list = builder.build_batch_list(&signer()).unwrap();
        assert!(list.batches[0].trace);
    }

    #[test]
    fn encoded_bytes_decode_to_batch_list() {
        let builder = BatchBuilder::new().with_transactions(vec![txn(1), txn(2)]);
        let bytes = builder.build(&signer()).unwrap();
        let decoded: BatchList = protos::decode(&bytes).unwrap();

        assert_eq!(decoded.batches.len(), 1);
        assert_eq!(decoded.batches[0].transactions, builder.transactions());
    }
}
