//! # Sabre
//!
//! Payloads for the Sabre smart-contract family and the transaction
//! builder that wraps them.
//!
//! ```text
//! action.rs      — the fourteen actions and their wire values
//! payload.rs     — SabrePayload (tagged), wire conversions, state addresses
//! builder.rs     — SabrePayloadBuilder and the BuildPayload trait
//! transaction.rs — SabreTransactionBuilder
//! ```

pub mod action;
pub mod builder;
pub mod payload;
pub mod transaction;

pub use action::{Action, ParseActionError};
pub use builder::{BuildPayload, SabrePayloadBuilder};
pub use payload::SabrePayload;
pub use transaction::SabreTransactionBuilder;
