//! # CLI Interface
//!
//! Defines the command-line argument structure for `xo-client` using
//! `clap` derive. Supports three subcommands: `take`, `keygen`, and
//! `address`. Every flag can also be set through an `XO_*` environment
//! variable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Submits XO game moves to a Sabre ledger.
///
/// Builds an EXECUTE_CONTRACT payload for the XO contract, signs it into a
/// transaction and batch, and POSTs the batch list to a node's scabbard
/// batches endpoint.
#[derive(Parser, Debug)]
#[command(
    name = "xo-client",
    about = "Submit XO moves through Sabre",
    version,
    propagate_version = true
)]
pub struct XoClientCli {
    /// Log output format.
    #[arg(long, global = true, env = "XO_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the XO client binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take a space in an XO game.
    Take(TakeArgs),
    /// Generate a signing key and write it to a file.
    Keygen(KeygenArgs),
    /// Print the state addresses for a contract and key.
    Address(AddressArgs),
}

/// Where the signing key comes from.
#[derive(clap::Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct KeySource {
    /// Hex-encoded private key.
    ///
    /// **Visible in the process list.** Prefer `--key-file` outside of
    /// local testing.
    #[arg(long, env = "XO_KEY")]
    pub key: Option<String>,

    /// File holding a hex-encoded private key, as written by `keygen`.
    #[arg(long, env = "XO_KEY_FILE")]
    pub key_file: Option<PathBuf>,
}

/// Arguments for the `take` subcommand.
#[derive(Parser, Debug)]
pub struct TakeArgs {
    /// Circuit the scabbard service belongs to.
    #[arg(long, env = "XO_CIRCUIT")]
    pub circuit: String,

    /// Scabbard service id.
    #[arg(long, env = "XO_SERVICE")]
    pub service: String,

    /// Node REST API, as `host:port` or a full `http://` URL.
    #[arg(long, env = "XO_HOST", default_value = "localhost:8088")]
    pub host: String,

    /// Name of the game.
    #[arg(long, env = "XO_GAME")]
    pub game: String,

    /// Board space to take, 1 through 9.
    #[arg(long, env = "XO_SPACE", value_parser = clap::value_parser!(u8).range(1..=9))]
    pub space: u8,

    #[command(flatten)]
    pub key: KeySource,

    /// Version of the deployed XO contract.
    #[arg(long, env = "XO_VERSION", default_value = "0.3.3")]
    pub xo_version: String,

    /// Ask the node to trace the batch.
    #[arg(long)]
    pub trace: bool,

    /// Print the encoded batch list and a summary instead of submitting.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `keygen` subcommand.
#[derive(Parser, Debug)]
pub struct KeygenArgs {
    /// File to write the hex-encoded private key to.
    #[arg(long, short = 'o', env = "XO_KEY_FILE", default_value = "xo.key")]
    pub output: PathBuf,

    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `address` subcommand.
#[derive(Parser, Debug)]
#[command(disable_version_flag = true)]
pub struct AddressArgs {
    /// Contract name.
    #[arg(long, default_value = "xo")]
    pub contract: String,

    /// Contract version.
    #[arg(long, env = "XO_VERSION", default_value = "0.3.3")]
    pub version: String,

    /// Record key within the contract's state (the game name for XO).
    #[arg(long)]
    pub key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        XoClientCli::command().debug_assert();
    }

    #[test]
    fn take_parses_with_defaults() {
        let cli = XoClientCli::try_parse_from([
            "xo-client",
            "take",
            "--circuit",
            "abcDE-12345",
            "--service",
            "a000",
            "--game",
            "game1",
            "--space",
            "5",
            "--key-file",
            "xo.key",
        ])
        .unwrap();

        let Commands::Take(args) = cli.command else {
            panic!("expected take");
        };
        assert_eq!(args.host, "localhost:8088");
        assert_eq!(args.xo_version, "0.3.3");
        assert_eq!(args.space, 5);
        assert_eq!(args.key.key_file, Some(PathBuf::from("xo.key")));
        assert!(!args.dry_run);
        assert_eq!(cli.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_space_out_of_range_rejected() {
        let result = XoClientCli::try_parse_from([
            "xo-client", "take", "--circuit", "c", "--service", "s", "--game", "g",
            "--space", "10", "--key", "00",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_both_key_sources_rejected() {
        let result = XoClientCli::try_parse_from([
            "xo-client", "take", "--circuit", "c", "--service", "s", "--game", "g",
            "--space", "1", "--key", "00", "--key-file", "xo.key",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn log_format_is_global() {
        let cli =
            XoClientCli::try_parse_from(["xo-client", "address", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
