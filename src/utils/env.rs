use crate::error::{ConfigError, Result};
use log::debug;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENV_FILE: &str = ".env";

/// Load a `.env` file into the process environment.
///
/// Variables that are already set are left alone. With `path == None` the
/// file is searched for from the current directory upwards. A missing file
/// is not an error and yields `Ok(None)`.
pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Ok(Some(path))
        }
        Err(e) if e.not_found() => {
            debug!("No environment file found, using process environment only");
            Ok(None)
        }
        Err(e) => Err(ConfigError::from(e)),
    }
}

/// Read a variable from the process environment, treating non-UTF-8 values
/// the same as an unset variable.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
