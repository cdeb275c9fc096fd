// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Transact SDK
//!
//! Client-side builders for Sabre smart-contract transactions: you describe
//! an action, and the crate hands back the exact bytes a ledger node's
//! batch endpoint accepts.
//!
//! ## Architecture
//!
//! Data flows one way, each stage consuming the previous stage's output:
//!
//! ```text
//! addressing → sabre (payload) → transaction → batch → (HTTP, not here)
//! ```
//!
//! - **addressing** — pure functions from names to 70-character state
//!   addresses.
//! - **sabre** — the fourteen Sabre actions, the payload builder, and the
//!   Sabre transaction builder.
//! - **transaction** — the generic transaction builder, the batch builder,
//!   and verification of built artifacts.
//! - **crypto** — hashing and the [`Signer`](crypto::Signer) capability.
//! - **protos** — protobuf wire messages.
//! - **config** — protocol constants.
//! - **error** — the shared [`BuildError`].
//!
//! ## Example
//!
//! ```rust
//! use transact_sdk::addressing::compute_deployment_address;
//! use transact_sdk::crypto::{Ed25519PrivateKey, Ed25519Signer};
//! use transact_sdk::sabre::{Action, SabrePayloadBuilder, SabreTransactionBuilder};
//! use transact_sdk::transaction::{BatchBuilder, BuildTransaction, TransactionBuilder};
//!
//! let signer = Ed25519Signer::new(Ed25519PrivateKey::generate());
//! let game = compute_deployment_address("xo", "game1");
//!
//! let payload = SabrePayloadBuilder::new()
//!     .with_action(Action::ExecuteContract)
//!     .with_contract_name("xo")
//!     .with_contract_version("0.3.3")
//!     .with_inputs([game.clone()])
//!     .with_outputs([game])
//!     .with_execute_contract_payload(b"game1,take,1".to_vec());
//! let (inputs, outputs) = payload.build()?.state_addresses()?;
//!
//! let txn = SabreTransactionBuilder::new()
//!     .with_payload_builder(payload)
//!     .with_transaction_builder(
//!         TransactionBuilder::new().with_inputs(inputs).with_outputs(outputs),
//!     )
//!     .build(&signer)?;
//!
//! let bytes = BatchBuilder::new()
//!     .with_transactions(vec![txn])
//!     .build(&signer)?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), transact_sdk::BuildError>(())
//! ```
//!
//! Builders are single-writer: configure one from a single place. None of
//! them do I/O.

pub mod addressing;
pub mod config;
pub mod crypto;
pub mod error;
pub mod protos;
pub mod sabre;
pub mod transaction;

pub use error::BuildError;
