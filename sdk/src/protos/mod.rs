//! # Wire Messages
//!
//! The protobuf messages a ledger node accepts, declared with `prost`
//! derives instead of generated code. Field numbers follow the ledger's
//! `.proto` definitions exactly: a node re-hashes and re-verifies the bytes
//! these produce, so the layout is part of the protocol.
//!
//! prost encodes fields in tag order and skips defaults, which gives the
//! stable byte output the header signatures depend on.

pub mod batch;
pub mod sabre;
pub mod transaction;

use prost::Message;

use crate::error::BuildError;

pub use batch::{Batch, BatchHeader, BatchList};
pub use transaction::{Transaction, TransactionHeader};

/// Encodes `message` into a freshly allocated buffer.
pub fn encode<M: Message>(message: &M) -> Result<Vec<u8>, BuildError> {
    let mut buf = Vec::with_capacity(message.encoded_len());
    message.encode(&mut buf)?;
    Ok(buf)
}

/// Decodes a `M` from `bytes`.
pub fn decode<M: Message + Default>(bytes: &[u8]) -> Result<M, BuildError> {
    Ok(M::decode(bytes)?)
}
