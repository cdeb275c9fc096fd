//! Transaction and transaction header messages.

use crate::error::BuildError;

/// Signed metadata describing a transaction.
///
/// `payload_sha512` binds the header to the exact payload bytes carried in
/// the [`Transaction`]; a node rejects a transaction whose payload hashes to
/// anything else.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionHeader {
    #[prost(string, tag = "1")]
    pub batcher_public_key: String,
    #[prost(string, repeated, tag = "2")]
    pub dependencies: Vec<String>,
    #[prost(string, tag = "3")]
    pub family_name: String,
    #[prost(string, tag = "4")]
    pub family_version: String,
    #[prost(string, repeated, tag = "5")]
    pub inputs: Vec<String>,
    #[prost(string, tag = "6")]
    pub nonce: String,
    #[prost(string, repeated, tag = "7")]
    pub outputs: Vec<String>,
    #[prost(string, tag = "9")]
    pub payload_sha512: String,
    #[prost(string, tag = "10")]
    pub signer_public_key: String,
}

/// A signed transaction.
///
/// `header_signature` is the hex signature over `header` and doubles as the
/// transaction id that batches and dependencies refer to.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {
    #[prost(bytes = "vec", tag = "1")]
    pub header: Vec<u8>,
    #[prost(string, tag = "2")]
    pub header_signature: String,
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}

impl Transaction {
    /// Decodes the serialized header.
    pub fn decode_header(&self) -> Result<TransactionHeader, BuildError> {
        super::decode(&self.header)
    }

    /// The transaction id (its header signature).
    pub fn id(&self) -> &str {
        &self.header_signature
    }
}
