//! Opt-in checks for a built configuration.
//!
//! Construction accepts anything the environment holds. These checks catch
//! the mistakes the toolchain would otherwise report later, at connect or
//! signing time.

use crate::config::network::NetworkProfile;
use crate::config::settings::ToolchainConfig;
use crate::utils::strip_hex_prefix;
use std::fmt;
use url::Url;

pub const PRIVATE_KEY_LEN: usize = 32;

const RPC_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];
const LOCAL_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "::1"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Network the issue belongs to, `None` for top-level fields
    pub network: Option<String>,
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn error(network: Option<&str>, field: &str, message: impl Into<String>) -> Self {
        ValidationIssue {
            severity: Severity::Error,
            network: network.map(str::to_string),
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn warning(network: Option<&str>, field: &str, message: impl Into<String>) -> Self {
        ValidationIssue {
            severity: Severity::Warning,
            ..Self::error(network, field, message)
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.network {
            Some(network) => write!(
                f,
                "{}: networks.{network}.{}: {}",
                self.severity, self.field, self.message
            ),
            None => write!(f, "{}: {}: {}", self.severity, self.field, self.message),
        }
    }
}

/// Run every check against `config`. An empty result means the toolchain
/// should accept the record as-is.
pub fn validate(config: &ToolchainConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if config.network(config.default_network_name()).is_none() {
        issues.push(ValidationIssue::error(
            None,
            "defaultNetwork",
            format!("'{}' has no network profile", config.default_network_name()),
        ));
    }

    if !is_exact_version(config.compiler_version()) {
        issues.push(ValidationIssue::error(
            None,
            "solidity",
            format!(
                "'{}' is not an exact MAJOR.MINOR.PATCH version",
                config.compiler_version()
            ),
        ));
    }

    for (name, profile) in config.networks() {
        validate_network(name, profile, &mut issues);
    }

    issues
}

fn validate_network(name: &str, profile: &NetworkProfile, issues: &mut Vec<ValidationIssue>) {
    match profile.url() {
        None => issues.push(ValidationIssue::error(Some(name), "url", "RPC URL is not set")),
        Some("") => issues.push(ValidationIssue::error(Some(name), "url", "RPC URL is empty")),
        Some(raw) => match Url::parse(raw) {
            Ok(url) => check_rpc_url(name, &url, issues),
            Err(e) => issues.push(ValidationIssue::error(
                Some(name),
                "url",
                format!("not a valid URL: {e}"),
            )),
        },
    }

    if profile.accounts().is_empty() {
        issues.push(ValidationIssue::error(
            Some(name),
            "accounts",
            "no signing account configured",
        ));
    }

    for (index, account) in profile.accounts().iter().enumerate() {
        let field = format!("accounts[{index}]");
        if let Err(message) = check_private_key(account.expose_secret()) {
            issues.push(ValidationIssue::error(Some(name), &field, message));
        }
    }
}

fn check_rpc_url(network: &str, url: &Url, issues: &mut Vec<ValidationIssue>) {
    if !RPC_SCHEMES.contains(&url.scheme()) {
        issues.push(ValidationIssue::error(
            Some(network),
            "url",
            format!("unsupported scheme '{}'", url.scheme()),
        ));
        return;
    }

    let host = url.host_str().unwrap_or_default();
    let host = host.trim_start_matches('[').trim_end_matches(']');
    let plain_text = matches!(url.scheme(), "http" | "ws");
    if plain_text && !LOCAL_HOSTS.contains(&host) {
        issues.push(ValidationIssue::warning(
            Some(network),
            "url",
            format!("unencrypted {} connection to {host}", url.scheme()),
        ));
    }
}

/// A private key must be 32 bytes of hex, optionally `0x`-prefixed. The
/// error message never includes the key itself.
fn check_private_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("private key is not set".to_string());
    }

    let bytes = hex::decode(strip_hex_prefix(key))
        .map_err(|e| format!("private key is not valid hex: {e}"))?;
    if bytes.len() != PRIVATE_KEY_LEN {
        return Err(format!(
            "private key is {} bytes, expected {PRIVATE_KEY_LEN}",
            bytes.len()
        ));
    }
    if bytes.iter().all(|b| *b == 0) {
        return Err("private key is all zeroes".to_string());
    }
    Ok(())
}

fn is_exact_version(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}
