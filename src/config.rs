//! Configuration management for the library catalog

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Days after which a borrowed item counts as overdue
    pub overdue_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_layered(Path::new("config"), &run_mode, None)
    }

    /// Layered load: `{dir}/default`, then `{dir}/{run_mode}`, then `LIBRARY_*`
    /// variables. `env_vars` replaces the process environment when set.
    pub fn load_layered(
        dir: &Path,
        run_mode: &str,
        env_vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let default_file = dir.join("default");
        let mode_file = dir.join(run_mode);

        let config = Config::builder()
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&mode_file.to_string_lossy()).required(false))
            // LIBRARY_CATALOG__OVERDUE_DAYS=7
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env_vars),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a single file, falling back to defaults for
    /// anything it leaves out
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { overdue_days: 14 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
