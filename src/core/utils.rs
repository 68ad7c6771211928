use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".travel_settlement";

/// Returns the application data directory, defaulting to `~/.travel_settlement`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("TRAVEL_SETTLEMENT_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
