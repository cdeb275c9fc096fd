//! Transaction and batch verification.
//!
//! The same checks a node runs before accepting a submission: headers
//! decode, the payload hash binds the payload, batch ids match the batch's
//! transactions, and every header signature verifies. Useful for testing
//! builders and for rejecting corrupted batches before they go out.
//!
//! Signatures are checked as Ed25519, the algorithm of the bundled
//! [`Ed25519Signer`](crate::crypto::Ed25519Signer).

use thiserror::Error;

use crate::crypto::hash::sha512_hex;
use crate::crypto::keys::{PublicKey, Signature};
use crate::crypto::signing::verify;
use crate::protos::{self, Batch, BatchHeader, Transaction, TransactionHeader};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Reasons a transaction or batch fails verification.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// The header bytes are not a valid header message.
    #[error("malformed header: {0}")]
    MalformedHeader(#[from] prost::DecodeError),

    /// The header's signer key is not valid hex.
    #[error("malformed signer public key: {key}")]
    MalformedPublicKey { key: String },

    /// The header signature is not valid hex.
    #[error("malformed header signature: {signature}")]
    MalformedSignature { signature: String },

    /// The payload does not hash to the header's `payload_sha512`.
    #[error("payload hash mismatch: header says {expected}, payload hashes to {actual}")]
    PayloadHashMismatch { expected: String, actual: String },

    /// The header signature does not verify against the header's signer.
    #[error("invalid signature: {id} does not verify against signer {signer}")]
    InvalidSignature { id: String, signer: String },

    /// The batch header lists different transactions than the batch holds.
    #[error("batch lists transaction {listed:?} at position {index}, but carries {actual:?}")]
    TransactionIdMismatch {
        index: usize,
        listed: Option<String>,
        actual: Option<String>,
    },

    /// A transaction names a different batcher than the key that signed
    /// the batch.
    #[error("transaction {index} names batcher {batcher}, but the batch is signed by {signer}")]
    BatcherKeyMismatch {
        index: usize,
        batcher: String,
        signer: String,
    },

    /// A transaction inside the batch failed verification.
    #[error("transaction {index} in batch: {source}")]
    Transaction {
        index: usize,
        #[source]
        source: Box<VerificationError>,
    },
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Checks that `header_signature` is `signer_key`'s signature over `header`.
fn check_signature(
    header: &[u8],
    header_signature: &str,
    signer_key: &str,
) -> Result<(), VerificationError> {
    let public_key =
        PublicKey::from_hex(signer_key).map_err(|_| VerificationError::MalformedPublicKey {
            key: signer_key.to_string(),
        })?;
    let signature = Signature::from_hex(header_signature).map_err(|_| {
        VerificationError::MalformedSignature {
            signature: header_signature.to_string(),
        }
    })?;

    if !verify(&public_key, header, &signature) {
        return Err(VerificationError::InvalidSignature {
            id: header_signature.to_string(),
            signer: signer_key.to_string(),
        });
    }
    Ok(())
}

/// Verifies a signed transaction.
///
/// The checks, in order:
///
/// 1. **Header** decodes.
/// 2. **Payload hash**: `payload_sha512` equals the SHA-512 of the payload.
/// 3. **Signature** verifies against the header's signer key.
///
/// Returns the decoded header on success.
pub fn verify_transaction(txn: &Transaction) -> Result<TransactionHeader, VerificationError> {
    let header: TransactionHeader = prost::Message::decode(txn.header.as_slice())?;

    let actual = sha512_hex(&txn.payload);
    if header.payload_sha512 != actual {
        return Err(VerificationError::PayloadHashMismatch {
            expected: header.payload_sha512,
            actual,
        });
    }

    check_signature(&txn.header, &txn.header_signature, &header.signer_public_key)?;
    Ok(header)
}

/// Verifies a batch and every transaction in it.
///
/// 1. **Header** decodes.
/// 2. **Ids**: the header's transaction ids equal the transactions' header
///    signatures, same count, same order.
/// 3. **Transactions** each pass [`verify_transaction`].
/// 4. **Batcher**: each transaction's `batcher_public_key` is the batch
///    header's signer key.
/// 5. **Signature** verifies against the batch header's signer key.
pub fn verify_batch(batch: &Batch) -> Result<BatchHeader, VerificationError> {
    let header: BatchHeader = prost::Message::decode(batch.header.as_slice())?;

    let count = header.transaction_ids.len().max(batch.transactions.len());
    for index in 0..count {
        let listed = header.transaction_ids.get(index);
        let actual = batch.transactions.get(index).map(Transaction::id);
        if listed.map(String::as_str) != actual {
            return Err(VerificationError::TransactionIdMismatch {
                index,
                listed: listed.cloned(),
                actual: actual.map(str::to_string),
            });
        }
    }

    for (index, txn) in batch.transactions.iter().enumerate() {
        let txn_header = verify_transaction(txn).map_err(|e| VerificationError::Transaction {
            index,
            source: Box::new(e),
        })?;
        if txn_header.batcher_public_key != header.signer_public_key {
            return Err(VerificationError::BatcherKeyMismatch {
                index,
                batcher: txn_header.batcher_public_key,
                signer: header.signer_public_key,
            });
        }
    }

    check_signature(
        &batch.header,
        &batch.header_signature,
        &header.signer_public_key,
    )?;
    Ok(header)
}

/// Decodes and verifies every batch in an encoded batch list.
pub fn verify_batch_list(bytes: &[u8]) -> Result<Vec<BatchHeader>, VerificationError> {
    let list: protos::BatchList = prost::Message::decode(bytes)?;
    list.batches.iter().map(verify_batch).collect()
}
