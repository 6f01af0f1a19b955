//! # Deploy Profile
//!
//! The settings record a smart-contract toolchain needs to deploy to the
//! Sepolia test network: which network is the default, how to reach it
//! (RPC URL and signing account, both taken from the environment) and which
//! Solidity compiler release to build with.
//!
//! Nothing here talks to a node, compiles or signs. The record is built
//! once from `SEPOLIA_RPC_URL` and `PRIVATE_KEY` and handed over as-is;
//! missing variables leave empty fields rather than failing.
//!
//! ## Layout
//! - `config/`: the record itself, network profiles, opt-in validation
//! - `utils/`: `.env` loading and secret masking
//! - `error/`: error type for everything around construction
//! - `cli/`: argument parsing for the `deploy-profile` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod utils;

pub use cli::{Command, Opt, OutputFormatArg};
pub use config::{
    validate, Account, NetworkProfile, Severity, ToolchainConfig, ValidationIssue,
    COMPILER_VERSION, DEFAULT_NETWORK, GLOBAL_CONFIG, PRIVATE_KEY_KEY, RPC_URL_KEY, SEPOLIA,
    SEPOLIA_CHAIN_ID,
};
pub use error::{ConfigError, Result};
pub use utils::{env_lookup, load_dotenv, mask_secret, DEFAULT_ENV_FILE};
