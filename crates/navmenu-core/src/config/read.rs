use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::{fs, path::Path};

use crate::config::model::{RESOURCE_TYPE, UserConfiguration};
use crate::error::ConfigError;
use crate::report::model::{InputHash, InputInfo};

/// A configuration document as read from disk.
///
/// Keeps the parsed resource together with a fingerprint of the exact
/// bytes it came from.
#[derive(Debug, Clone)]
pub struct ConfigContext {
    /// Source path (informational only).
    pub path: Option<String>,

    pub configuration: UserConfiguration,

    pub size_bytes: u64,

    pub hash_alg: String,

    /// Hex-encoded hash of the document bytes.
    pub hash_hex: String,
}

impl ConfigContext {
    /// Convert into the report-facing input metadata, dropping the parsed
    /// configuration.
    pub fn into_input(self) -> InputInfo {
        InputInfo {
            path: self.path,
            configuration_id: self.configuration.id,
            size_bytes: self.size_bytes,
            hash: InputHash {
                algorithm: self.hash_alg,
                value: self.hash_hex,
            },
        }
    }
}

/// Parse and validate a configuration document from raw bytes.
///
/// A missing `resourceType` is tolerated; a different one is rejected.
pub fn parse_configuration(bytes: &[u8]) -> Result<UserConfiguration, ConfigError> {
    let configuration: UserConfiguration = serde_json::from_slice(bytes)?;

    match configuration.resource_type.as_deref() {
        None | Some(RESOURCE_TYPE) => Ok(configuration),
        Some(other) => Err(ConfigError::WrongResourceType(other.to_string())),
    }
}

/// Read a configuration document and compute a stable fingerprint.
///
/// The fingerprint depends only on the file bytes.
pub fn read_configuration(path: &Path) -> Result<ConfigContext> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read configuration: {}", path.display()))?;

    let configuration = parse_configuration(&bytes)
        .with_context(|| format!("invalid configuration: {}", path.display()))?;

    let digest = Sha256::digest(&bytes);

    Ok(ConfigContext {
        path: Some(path.display().to_string()),
        configuration,
        size_bytes: bytes.len() as u64,
        hash_alg: "sha256".to_string(),
        hash_hex: hex::encode(digest),
    })
}
