//! Configuration management
//!
//! The settings record handed to the contract toolchain: default network,
//! per-network connection profiles and the compiler version, plus opt-in
//! validation of what the environment supplied.

pub mod network;
pub mod settings;
pub mod validation;

pub use network::{Account, NetworkProfile, SEPOLIA, SEPOLIA_CHAIN_ID};
pub use settings::{
    ToolchainConfig, COMPILER_VERSION, DEFAULT_NETWORK, GLOBAL_CONFIG, PRIVATE_KEY_KEY,
    RPC_URL_KEY,
};
pub use validation::{validate, Severity, ValidationIssue, PRIVATE_KEY_LEN};
