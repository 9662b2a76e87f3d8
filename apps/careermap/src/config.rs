use std::path::PathBuf;

use anyhow::{Context, Result};

/// The catalog bundled with the package, independent of the working directory.
pub const DEFAULT_CATALOG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/careers.json");
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration loaded from environment variables.
/// Command-line flags are applied on top via [`Config::with_overrides`].
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            catalog_path: optional_env("CAREERMAP_CATALOG")?
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH)),
            rust_log: optional_env("RUST_LOG")?.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    pub fn with_overrides(mut self, catalog: Option<PathBuf>, log_level: Option<String>) -> Self {
        if let Some(path) = catalog {
            self.catalog_path = path;
        }
        if let Some(level) = log_level {
            self.rust_log = level;
        }
        self
    }
}

/// Reads an optional variable. Unset is fine; set-but-not-unicode is a startup error.
fn optional_env(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Environment variable '{key}' is not valid unicode")),
    }
}
