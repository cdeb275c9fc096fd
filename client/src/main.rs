// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # XO Client
//!
//! Entry point for the `xo-client` binary. Parses CLI arguments,
//! initializes logging, and runs one subcommand:
//!
//! - `take`    — build, sign and submit an XO move as a Sabre batch
//! - `keygen`  — generate a signing key file
//! - `address` — print the state addresses of a contract

mod cli;
mod keys;
mod logging;
mod submit;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use transact_sdk::addressing::{
    compute_contract_address, compute_contract_prefix, compute_contract_registry_address,
    compute_deployment_address, compute_namespace_registry_address,
};
use transact_sdk::config::{SABRE_FAMILY_NAME, SABRE_FAMILY_VERSION};
use transact_sdk::crypto::{Ed25519PrivateKey, Signer};
use transact_sdk::protos::{self, BatchList};
use transact_sdk::sabre::{Action, SabrePayloadBuilder, SabreTransactionBuilder};
use transact_sdk::transaction::{BatchBuilder, BuildTransaction, TransactionBuilder};

use cli::{Commands, XoClientCli};

/// Name of the contract every `take` executes.
const XO_CONTRACT_NAME: &str = "xo";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = XoClientCli::parse();
    logging::init_logging("xo_client=info,transact_sdk=info", cli.log_format);

    match cli.command {
        Commands::Take(args) => take(args).await,
        Commands::Keygen(args) => keygen(args),
        Commands::Address(args) => address(args),
    }
}

/// What `take --dry-run` prints next to the encoded batch list.
#[derive(Debug, Serialize)]
struct BatchSummary {
    batch_id: String,
    transaction_ids: Vec<String>,
    family_name: &'static str,
    family_version: &'static str,
    signer_public_key: String,
    inputs: Vec<String>,
    outputs: Vec<String>,
    bytes: usize,
}

/// Builds the XO move as a Sabre batch and submits it (or prints it).
async fn take(args: cli::TakeArgs) -> Result<()> {
    let signer = keys::load_signer(&args.key)?;
    let game_address = compute_deployment_address(XO_CONTRACT_NAME, &args.game);

    let payload = SabrePayloadBuilder::new()
        .with_action(Action::ExecuteContract)
        .with_contract_name(XO_CONTRACT_NAME)
        .with_contract_version(&args.xo_version)
        .with_inputs([game_address.clone()])
        .with_outputs([game_address])
        .with_execute_contract_payload(format!("{},take,{}", args.game, args.space).into_bytes());

    let (inputs, outputs) = payload
        .build()
        .and_then(|p| p.state_addresses())
        .context("failed to build XO payload")?;

    let txn = SabreTransactionBuilder::new()
        .with_payload_builder(payload)
        .with_transaction_builder(
            TransactionBuilder::new()
                .with_inputs(inputs.clone())
                .with_outputs(outputs.clone()),
        )
        .build(&signer)
        .context("failed to build Sabre transaction")?;

    let batch_list = BatchBuilder::new()
        .with_transactions(vec![txn])
        .with_trace(args.trace)
        .build(&signer)
        .context("failed to build batch")?;

    tracing::info!(
        game = %args.game,
        space = args.space,
        bytes = batch_list.len(),
        "batch built"
    );

    if args.dry_run {
        let summary = summarize(&batch_list, &signer, inputs, outputs)?;
        println!("{}", hex::encode(&batch_list));
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let url = submit::batches_url(&args.host, &args.circuit, &args.service);
    let response = submit::submit_batch_list(&reqwest::Client::new(), &url, batch_list).await?;
    println!("{}", response);
    Ok(())
}

fn summarize(
    batch_list: &[u8],
    signer: &dyn Signer,
    inputs: Vec<String>,
    outputs: Vec<String>,
) -> Result<BatchSummary> {
    let list: BatchList = protos::decode(batch_list).context("batch list does not decode")?;
    let batch = list
        .batches
        .first()
        .context("batch list is empty")?;
    Ok(BatchSummary {
        batch_id: batch.header_signature.clone(),
        transaction_ids: batch
            .transactions
            .iter()
            .map(|t| t.header_signature.clone())
            .collect(),
        family_name: SABRE_FAMILY_NAME,
        family_version: SABRE_FAMILY_VERSION,
        signer_public_key: signer.public_key().as_hex(),
        inputs,
        outputs,
        bytes: batch_list.len(),
    })
}

/// Generates a key, writes it, and prints the public key.
fn keygen(args: cli::KeygenArgs) -> Result<()> {
    let key = Ed25519PrivateKey::generate();
    keys::write_key_file(&args.output, &key, args.force)?;

    let public_key = key.public_key().as_hex();
    tracing::info!(
        public_key = %public_key,
        key_path = %args.output.display(),
        "signing key generated"
    );

    println!("Key written to {}", args.output.display());
    println!("Public key: {}", public_key);
    Ok(())
}

/// Prints the addresses a contract (and optionally one of its records)
/// lives at.
fn address(args: cli::AddressArgs) -> Result<()> {
    let prefix = compute_contract_prefix(&args.contract);
    let namespace_registry = compute_namespace_registry_address(&prefix)?;

    println!("contract prefix     : {}", prefix);
    println!(
        "contract            : {}",
        compute_contract_address(&args.contract, &args.version)
    );
    println!(
        "contract registry   : {}",
        compute_contract_registry_address(&args.contract)
    );
    println!("namespace registry  : {}", namespace_registry);
    if let Some(key) = &args.key {
        println!(
            "record {:<12} : {}",
            key,
            compute_deployment_address(&args.contract, key)
        );
    }
    Ok(())
}
