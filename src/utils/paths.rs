use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".saletrack";
const ENTRIES_FILE: &str = "entries.json";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.saletrack`.
/// `SALETRACK_HOME` overrides it, which is how tests isolate themselves.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SALETRACK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Fixed path of the record blob inside a data directory.
pub fn entries_file_in(base: &Path) -> PathBuf {
    base.join(ENTRIES_FILE)
}

/// Path of the CLI configuration file inside a data directory.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
