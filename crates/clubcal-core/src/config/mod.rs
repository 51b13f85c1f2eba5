use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_CACHE_MAX_AGE_SECS, DEFAULT_PRODUCT_ID, DEFAULT_TIMEZONE, DEFAULT_UID_DOMAIN,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub feed: FeedConfig,
}

/// Where entities and events are read from.
///
/// A `fixture` path takes precedence over `url` and loads the whole
/// dataset from a JSON document into memory.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u8,
    pub fixture: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the server address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            format!("http://{}", self.bind_addr())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub product_id: String,
    pub uid_domain: String,
    pub cache_max_age_secs: u32,
    pub default_timezone: String,
}

impl FeedConfig {
    /// ## Summary
    /// Parses the configured fallback timezone.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the value is not a known
    /// IANA timezone identifier.
    pub fn default_tz(&self) -> CoreResult<chrono_tz::Tz> {
        self.default_timezone.parse::<chrono_tz::Tz>().map_err(|_err| {
            CoreError::InvalidConfiguration(format!(
                "unknown feed.default_timezone `{}`",
                self.default_timezone
            ))
        })
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
            cache_max_age_secs: DEFAULT_CACHE_MAX_AGE_SECS,
            default_timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

/// Prefix of the environment variables read into [`Settings`].
pub const ENV_PREFIX: &str = "CLUBCAL";

/// `CLUBCAL_<SECTION>__<KEY>`, e.g. `CLUBCAL_FEED__DEFAULT_TIMEZONE`.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}

impl Settings {
    /// ## Summary
    /// Loads configuration into a `Settings`.
    ///
    /// Sources, lowest precedence first:
    /// 1. built-in defaults
    /// 2. `CLUBCAL_`-prefixed environment variables, with `__` between the
    ///    section and the key (`CLUBCAL_FEED__CACHE_MAX_AGE_SECS=120`)
    /// 3. an optional `config.toml` in the working directory
    ///
    /// `DATABASE_URL`, when set, overrides `database.url` from every source.
    /// [`load_config`] reads a `.env` file into the environment first.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails,
    /// or if the configured fallback timezone is unknown.
    pub fn load() -> Result<Self> {
        Self::from_sources(environment(), std::env::var("DATABASE_URL").ok())
    }

    fn from_sources(env: config::Environment, database_url: Option<String>) -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("database.max_connections", 4)?
            .set_default("logging.level", "info")?
            .set_default("feed.product_id", DEFAULT_PRODUCT_ID)?
            .set_default("feed.uid_domain", DEFAULT_UID_DOMAIN)?
            .set_default(
                "feed.cache_max_age_secs",
                i64::from(DEFAULT_CACHE_MAX_AGE_SECS),
            )?
            .set_default("feed.default_timezone", DEFAULT_TIMEZONE)?
            .add_source(env)
            .add_source(config::File::with_name("config.toml").required(false))
            .set_override_option("database.url", database_url)?
            .build()?
            .try_deserialize::<Settings>()?;

        settings.feed.default_tz()?;

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
