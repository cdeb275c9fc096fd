//! Batch, batch header and batch list messages.

use super::transaction::Transaction;
use crate::error::BuildError;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchHeader {
    #[prost(string, tag = "1")]
    pub signer_public_key: String,
    #[prost(string, repeated, tag = "2")]
    pub transaction_ids: Vec<String>,
}

/// Transactions that are committed together or not at all.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Batch {
    #[prost(bytes = "vec", tag = "1")]
    pub header: Vec<u8>,
    #[prost(string, tag = "2")]
    pub header_signature: String,
    #[prost(message, repeated, tag = "3")]
    pub transactions: Vec<Transaction>,
    /// Asks the receiving node to trace this batch through validation.
    #[prost(bool, tag = "4")]
    pub trace: bool,
}

impl Batch {
    /// Decodes the serialized header.
    pub fn decode_header(&self) -> Result<BatchHeader, BuildError> {
        super::decode(&self.header)
    }
}

/// The submission envelope POSTed to a node.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchList {
    #[prost(message, repeated, tag = "1")]
    pub batches: Vec<Batch>,
}
