//! Utility functions
//!
//! Environment loading and secret masking helpers.

pub mod env;
pub mod secrets;

pub use env::{env_lookup, load_dotenv, DEFAULT_ENV_FILE};
pub use secrets::{mask_secret, strip_hex_prefix};
