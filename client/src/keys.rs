//! Key file handling.
//!
//! Key files hold a single line: the hex-encoded 32-byte private key.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use transact_sdk::crypto::{Ed25519PrivateKey, Ed25519Signer};

use crate::cli::KeySource;

/// Builds the signer from an inline key or a key file.
pub fn load_signer(source: &KeySource) -> Result<Ed25519Signer> {
    let private_key = match (&source.key, &source.key_file) {
        (Some(hex_key), _) => {
            Ed25519PrivateKey::from_hex(hex_key).context("--key is not a valid private key")?
        }
        (None, Some(path)) => read_key_file(path)?,
        (None, None) => anyhow::bail!("no signing key given: pass --key or --key-file"),
    };
    Ok(Ed25519Signer::new(private_key))
}

pub fn read_key_file(path: &Path) -> Result<Ed25519PrivateKey> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read key file {}", path.display()))?;
    Ed25519PrivateKey::from_hex(&contents)
        .with_context(|| format!("{} does not hold a valid private key", path.display()))
}

/// Writes `key` to `path`, readable by the owner only on Unix.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_key_file(path: &Path, key: &Ed25519PrivateKey, force: bool) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .with_context(|| format!("failed to create key file {}", path.display()))?;
    writeln!(file, "{}", key.to_hex())
        .with_context(|| format!("failed to write key file {}", path.display()))?;

    // `mode` only applies to newly created files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}
