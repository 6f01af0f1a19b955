use crate::utils::mask_secret;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const SEPOLIA: &str = "sepolia";
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// A signing key handed to the toolchain. The key material is wiped when the
/// value is dropped and never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct Account(String);

impl Account {
    pub fn new(secret: impl Into<String>) -> Account {
        Account(secret.into())
    }

    pub fn expose_secret(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn masked(&self) -> String {
        mask_secret(&self.0)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Account").field(&self.masked()).finish()
    }
}

/// Connection descriptor for one named network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    url: Option<String>,
    accounts: Vec<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chain_id: Option<u64>,
}

impl NetworkProfile {
    pub fn new(url: Option<String>, accounts: Vec<Account>, chain_id: Option<u64>) -> Self {
        NetworkProfile {
            url,
            accounts,
            chain_id,
        }
    }

    /// Sepolia profile: one account, empty when no key was supplied.
    pub fn sepolia(url: Option<String>, private_key: Option<String>) -> Self {
        let account = Account::new(private_key.unwrap_or_default());
        NetworkProfile::new(url, vec![account], Some(SEPOLIA_CHAIN_ID))
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn accounts(&self) -> &[Account] {
        self.accounts.as_slice()
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    /// Same profile with every account masked, for printing.
    pub fn redacted(&self) -> NetworkProfile {
        NetworkProfile {
            url: self.url.clone(),
            accounts: self
                .accounts
                .iter()
                .map(|account| Account::new(account.masked()))
                .collect(),
            chain_id: self.chain_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    #[test]
    fn test_sepolia_profile_has_single_account() {
        let profile = NetworkProfile::sepolia(Some("https://rpc.example".to_string()), None);
        assert_eq!(profile.url(), Some("https://rpc.example"));
        assert_eq!(profile.accounts().len(), 1);
        assert_eq!(profile.accounts()[0].expose_secret(), "");
        assert_eq!(profile.chain_id(), Some(SEPOLIA_CHAIN_ID));
    }

    #[test]
    fn test_account_debug_hides_secret() {
        let account = Account::new(KEY);
        let debug = format!("{account:?}");
        assert!(!debug.contains(KEY));
        assert!(debug.contains("****"));
    }

    #[test]
    fn test_account_zeroize_clears_secret() {
        let mut account = Account::new(KEY);
        account.zeroize();
        assert!(account.is_empty());
    }

    #[test]
    fn test_redacted_profile_masks_accounts_only() {
        let profile = NetworkProfile::sepolia(
            Some("https://rpc.example".to_string()),
            Some(KEY.to_string()),
        );
        let redacted = profile.redacted();
        assert_eq!(redacted.url(), profile.url());
        assert_eq!(redacted.accounts()[0].expose_secret(), "0x4c****2318");
    }

    #[test]
    fn test_profile_json_uses_host_keys() {
        let profile = NetworkProfile::sepolia(None, Some("abc123".to_string()));
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["url"], serde_json::Value::Null);
        assert_eq!(value["accounts"][0], "abc123");
        assert_eq!(value["chainId"], SEPOLIA_CHAIN_ID);
    }
}
