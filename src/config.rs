//! Input collection: the five fields from CLI flags, a JSON file or the environment.
//!
//! A field given on the command line wins over the file, which wins over the
//! environment (`NETCHECK_*`, optionally loaded from `.env`).

use crate::models::{HostConfig, NetworkConfig};
use crate::processing::Lang;
use serde::Deserialize;
use std::error::Error;
use std::path::Path;

pub const ENV_IP1: &str = "NETCHECK_IP1";
pub const ENV_MASK1: &str = "NETCHECK_MASK1";
pub const ENV_IP2: &str = "NETCHECK_IP2";
pub const ENV_MASK2: &str = "NETCHECK_MASK2";
pub const ENV_GATEWAY: &str = "NETCHECK_GATEWAY";
pub const ENV_LANG: &str = "NETCHECK_LANG";

/// Layout of a `--config` file.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    host1: HostConfig,
    host2: HostConfig,
    gateway: String,
    #[serde(default)]
    lang: Option<Lang>,
}

/// Raw, possibly incomplete, input fields.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputFields {
    pub ip1: Option<String>,
    pub mask1: Option<String>,
    pub ip2: Option<String>,
    pub mask2: Option<String>,
    pub gateway: Option<String>,
    pub lang: Option<Lang>,
}

impl InputFields {
    /// Read fields from `NETCHECK_*` environment variables.
    pub fn from_env() -> InputFields {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read fields through `lookup`, e.g. an environment or a map in tests.
    pub fn from_lookup<F>(lookup: F) -> InputFields
    where
        F: Fn(&str) -> Option<String>,
    {
        let lang = lookup(ENV_LANG).and_then(|l| match l.parse::<Lang>() {
            Ok(lang) => Some(lang),
            Err(e) => {
                log::warn!("Ignoring {ENV_LANG}: {e}");
                None
            }
        });
        InputFields {
            ip1: lookup(ENV_IP1),
            mask1: lookup(ENV_MASK1),
            ip2: lookup(ENV_IP2),
            mask2: lookup(ENV_MASK2),
            gateway: lookup(ENV_GATEWAY),
            lang,
        }
    }

    /// Read a JSON configuration file.
    ///
    /// # Returns
    /// * `Err` - If the file is missing or does not match the expected layout;
    ///   the message names the failing JSON path.
    pub fn from_file(path: &str) -> Result<InputFields, Box<dyn Error>> {
        if !Path::new(path).exists() {
            return Err(format!("Config file does not exist: {path}").into());
        }
        log::info!("Reading config file: {path}");
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading config file {path}: {e}"))?;
        Self::from_json(&json).map_err(|e| format!("Error in config file {path}: {e}").into())
    }

    pub fn from_json(json: &str) -> Result<InputFields, Box<dyn Error>> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let file: ConfigFile = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|e| format!("{path}: {inner}", path = e.path(), inner = e.inner()))?;
        Ok(InputFields {
            ip1: Some(file.host1.ip),
            mask1: Some(file.host1.mask),
            ip2: Some(file.host2.ip),
            mask2: Some(file.host2.mask),
            gateway: Some(file.gateway),
            lang: file.lang,
        })
    }

    /// Fill fields missing in `self` from `fallback`.
    pub fn or(self, fallback: InputFields) -> InputFields {
        InputFields {
            ip1: self.ip1.or(fallback.ip1),
            mask1: self.mask1.or(fallback.mask1),
            ip2: self.ip2.or(fallback.ip2),
            mask2: self.mask2.or(fallback.mask2),
            gateway: self.gateway.or(fallback.gateway),
            lang: self.lang.or(fallback.lang),
        }
    }

    /// Build the configuration to check. Every field is trimmed.
    ///
    /// # Returns
    /// * `Err` - naming every field that was not supplied
    pub fn into_network_config(self) -> Result<NetworkConfig, Box<dyn Error>> {
        let missing: Vec<&str> = [
            ("ip1", &self.ip1),
            ("mask1", &self.mask1),
            ("ip2", &self.ip2),
            ("mask2", &self.mask2),
            ("gateway", &self.gateway),
        ]
        .iter()
        .filter(|(_, v)| v.as_deref().map_or(true, |s| s.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();
        if !missing.is_empty() {
            return Err(format!("Missing input field(s): {}", missing.join(", ")).into());
        }

        let field = |v: Option<String>| v.unwrap_or_default();
        Ok(NetworkConfig::new(
            HostConfig::new(&field(self.ip1), &field(self.mask1)),
            HostConfig::new(&field(self.ip2), &field(self.mask2)),
            &field(self.gateway),
        ))
    }
}
