//! # Transaction Module
//!
//! Turning payload bytes into signed transactions and signed transactions
//! into submittable batches.
//!
//! ## Architecture
//!
//! ```text
//! builder.rs      — BuildTransaction trait and the generic TransactionBuilder
//! batch.rs        — BatchBuilder: signed batch header, encoded BatchList
//! verification.rs — Hash, id and signature checks for built artifacts
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Build** — a [`BuildTransaction`] implementation signs a header over
//!    the payload. The Sabre-specific builder lives in [`crate::sabre`].
//! 2. **Batch** — [`BatchBuilder`] lists the transaction ids in a signed
//!    batch header.
//! 3. **Submit** — the encoded `BatchList` is POSTed to a node, outside
//!    this crate.
//! 4. **Verify** — [`verify_batch`] runs the node's integrity checks
//!    locally.

pub mod batch;
pub mod builder;
pub mod verification;

pub use batch::BatchBuilder;
pub use builder::{BuildTransaction, TransactionBuilder};
pub use verification::{verify_batch, verify_batch_list, verify_transaction, VerificationError};
