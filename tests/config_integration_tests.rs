//! Configuration integration tests
//!
//! Exercises construction from the real process environment and `.env`
//! loading. The environment is process-wide, so every test here holds
//! `ENV_LOCK` while it touches it.

use deploy_profile::{
    load_dotenv, validate, ToolchainConfig, GLOBAL_CONFIG, PRIVATE_KEY_KEY, RPC_URL_KEY,
};
use std::env;
use std::sync::{Mutex, MutexGuard};
use tempfile::tempdir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

fn lock_env() -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    env::remove_var(RPC_URL_KEY);
    env::remove_var(PRIVATE_KEY_KEY);
    guard
}

#[test]
fn test_from_env_reads_both_variables() {
    let _guard = lock_env();
    env::set_var(RPC_URL_KEY, "https://example.invalid");
    env::set_var(PRIVATE_KEY_KEY, "abc123");

    let config = ToolchainConfig::from_env();
    let sepolia = config.network("sepolia").unwrap();
    assert_eq!(sepolia.url(), Some("https://example.invalid"));
    assert_eq!(sepolia.accounts()[0].expose_secret(), "abc123");
    assert_eq!(config.compiler_version(), "0.8.19");
}

#[test]
fn test_from_env_with_nothing_set() {
    let _guard = lock_env();

    let config = ToolchainConfig::from_env();
    let sepolia = config.active_network().unwrap();
    assert_eq!(sepolia.url(), None);
    assert_eq!(sepolia.accounts().len(), 1);
    assert!(sepolia.accounts()[0].is_empty());
    assert_eq!(config.default_network_name(), "sepolia");
}

#[test]
fn test_from_env_is_idempotent() {
    let _guard = lock_env();
    env::set_var(RPC_URL_KEY, "https://rpc.sepolia.org");

    assert_eq!(ToolchainConfig::from_env(), ToolchainConfig::from_env());
}

#[test]
fn test_global_config_is_built_once() {
    let _guard = lock_env();

    let first: &ToolchainConfig = &GLOBAL_CONFIG;
    env::set_var(PRIVATE_KEY_KEY, "changed-after-first-access");
    let second: &ToolchainConfig = &GLOBAL_CONFIG;

    assert!(std::ptr::eq(first, second));
    assert_eq!(second.compiler_version(), "0.8.19");
    assert!(second.networks().contains_key(second.default_network_name()));
}

#[test]
fn test_dotenv_populates_environment() {
    let _guard = lock_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(
        &path,
        format!("{RPC_URL_KEY}=https://rpc.sepolia.org\n{PRIVATE_KEY_KEY}={KEY}\n"),
    )
    .unwrap();

    let loaded = load_dotenv(Some(&path)).unwrap();
    assert_eq!(loaded.as_deref(), Some(path.as_path()));

    let config = ToolchainConfig::from_env();
    let sepolia = config.active_network().unwrap();
    assert_eq!(sepolia.url(), Some("https://rpc.sepolia.org"));
    assert_eq!(sepolia.accounts()[0].expose_secret(), KEY);
    assert!(validate(&config).is_empty());
}

#[test]
fn test_dotenv_does_not_override_process_environment() {
    let _guard = lock_env();
    env::set_var(RPC_URL_KEY, "https://from-process.example");

    let dir = tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, format!("{RPC_URL_KEY}=https://from-file.example\n")).unwrap();
    load_dotenv(Some(&path)).unwrap();

    let config = ToolchainConfig::from_env();
    assert_eq!(
        config.active_network().unwrap().url(),
        Some("https://from-process.example")
    );
}
