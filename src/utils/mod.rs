pub mod paths;

use std::{fs, path::Path, sync::Once};

use crate::errors::Result;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("saletrack=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Creates the directory (and any missing parents) when absent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
