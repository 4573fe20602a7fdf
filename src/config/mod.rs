// Configuration module entry point
// Loads logging and HTTP settings from file, environment and defaults

mod types;

pub use types::{Config, HttpConfig, LoggingConfig};

/// Prefix of environment variables that override file settings
const ENV_PREFIX: &str = "NETP";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// A missing file is not an error; defaults apply instead
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "text")?
            .set_default("http.server_name", "netp/0.1")?
            .set_default("http.enable_jsonp", true)?
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from `config.toml` in the working directory
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render configuration as a TOML document
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
