//! Common helper functions shared across CLI commands

use crate::config::Config;
use crate::error::ConfigError;
use std::path::Path;

/// Exit code: every stage completed
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code: at least one stage failed
pub const EXIT_STAGE_FAILED: i32 = 1;
/// Exit code: fatal error before any stage ran
pub const EXIT_ERROR: i32 = 2;

/// Name of the configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "nameshift.toml";

/// Load nameshift.toml from the working directory
///
/// # Errors
///
/// Returns `ConfigError::Io` if nameshift.toml does not exist or cannot
/// be read, `ConfigError::Parse`/`Validation` if it is invalid.
pub(crate) fn load_config() -> Result<Config, ConfigError> {
    let config_path = Path::new(CONFIG_FILE);
    if !config_path.exists() {
        return Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "nameshift.toml not found. Run 'nameshift init' to create it.",
        )));
    }

    Config::load(config_path)
}
