use crate::config::network::{NetworkProfile, SEPOLIA};
use crate::error::{ConfigError, Result};
use crate::utils::env_lookup;
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built from the process environment on first access.
pub static GLOBAL_CONFIG: Lazy<ToolchainConfig> = Lazy::new(ToolchainConfig::from_env);

pub const RPC_URL_KEY: &str = "SEPOLIA_RPC_URL";
pub const PRIVATE_KEY_KEY: &str = "PRIVATE_KEY";

pub const DEFAULT_NETWORK: &str = SEPOLIA;
pub const COMPILER_VERSION: &str = "0.8.19";

/// The settings record handed to the contract toolchain.
///
/// Fields serialize under the toolchain's own key names (`defaultNetwork`,
/// `networks`, `solidity`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainConfig {
    #[serde(rename = "defaultNetwork")]
    default_network_name: String,
    networks: BTreeMap<String, NetworkProfile>,
    #[serde(rename = "solidity")]
    compiler_version: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ToolchainConfig {
    /// Build the record from the current process environment. Unset
    /// variables leave the matching fields empty; this never fails.
    pub fn from_env() -> ToolchainConfig {
        Self::from_lookup(env_lookup)
    }

    /// Build the record using `lookup` in place of the process environment.
    pub fn from_lookup<F>(lookup: F) -> ToolchainConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(RPC_URL_KEY);
        let private_key = lookup(PRIVATE_KEY_KEY);
        debug!(
            "Building toolchain config: {RPC_URL_KEY} {}, {PRIVATE_KEY_KEY} {}",
            if url.is_some() { "set" } else { "unset" },
            if private_key.is_some() { "set" } else { "unset" },
        );

        let mut networks = BTreeMap::new();
        networks.insert(
            SEPOLIA.to_string(),
            NetworkProfile::sepolia(url, private_key),
        );

        ToolchainConfig {
            default_network_name: DEFAULT_NETWORK.to_string(),
            networks,
            compiler_version: COMPILER_VERSION.to_string(),
        }
    }

    pub fn default_network_name(&self) -> &str {
        self.default_network_name.as_str()
    }

    pub fn compiler_version(&self) -> &str {
        self.compiler_version.as_str()
    }

    pub fn networks(&self) -> &BTreeMap<String, NetworkProfile> {
        &self.networks
    }

    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    pub fn network(&self, name: &str) -> Option<&NetworkProfile> {
        self.networks.get(name)
    }

    /// Profile selected by `default_network_name`.
    pub fn active_network(&self) -> Result<&NetworkProfile> {
        self.network(&self.default_network_name)
            .ok_or_else(|| ConfigError::UnknownNetwork(self.default_network_name.clone()))
    }

    /// Copy of the record with every account masked.
    pub fn redacted(&self) -> ToolchainConfig {
        ToolchainConfig {
            default_network_name: self.default_network_name.clone(),
            networks: self
                .networks
                .iter()
                .map(|(name, profile)| (name.clone(), profile.redacted()))
                .collect(),
            compiler_version: self.compiler_version.clone(),
        }
    }

    pub fn to_json(&self, reveal_secrets: bool) -> Result<String> {
        let json = if reveal_secrets {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string_pretty(&self.redacted())?
        };
        Ok(json)
    }

    pub fn to_toml(&self, reveal_secrets: bool) -> Result<String> {
        let toml = if reveal_secrets {
            toml::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(&self.redacted())?
        };
        Ok(toml)
    }
}
