use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod overrides;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use overrides::InputOverrides;
pub use settings::{AssistantConfig, Config, DefaultInputs, LoggingConfig, ServerConfig};

/// Prefix for environment overrides, e.g. `KPI__ASSISTANT__TOKEN`.
const ENV_PREFIX: &str = "KPI";

/// Loads the application configuration from `config.toml` in the working directory.
///
/// This function is the primary entry point for this crate. A missing file is not
/// an error: every section has defaults, and environment variables are layered on top.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config.toml"))
}

/// Loads and validates the configuration from an explicit file path.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(config)
}
