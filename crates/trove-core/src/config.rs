use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_LOCKOUT_THRESHOLD, DEFAULT_PASSWORD_MIN_LENGTH};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Failed-login count at which an account locks.
    pub lockout_threshold: u32,
    /// When set, registration only accepts addresses under this domain.
    pub approved_email_domain: Option<String>,
    pub password: PasswordPolicyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordPolicyConfig {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_special: bool,
}

impl Default for PasswordPolicyConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it
    /// fails, or if the resulting settings are unusable.
    pub fn load() -> CoreResult<Self> {
        let settings = Config::builder()
            .set_default("database.max_connections", 4)?
            .set_default("logging.level", "debug")?
            .set_default("auth.lockout_threshold", i64::from(DEFAULT_LOCKOUT_THRESHOLD))?
            .set_default("auth.password.min_length", 8)?
            .set_default("auth.password.require_uppercase", true)?
            .set_default("auth.password.require_lowercase", true)?
            .set_default("auth.password.require_digit", true)?
            .set_default("auth.password.require_special", true)?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;

        Ok(settings)
    }

    /// ## Summary
    /// Rejects settings that would render the system inoperable: a zero
    /// lockout threshold locks every account on sight, and an empty pool or
    /// zero-length password policy cannot serve anyone.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` naming the offending setting.
    pub fn validate(&self) -> CoreResult<()> {
        if self.auth.lockout_threshold == 0 {
            return Err(CoreError::InvalidConfiguration(
                "auth.lockout_threshold must be at least 1".to_string(),
            ));
        }
        if self.auth.password.min_length == 0 {
            return Err(CoreError::InvalidConfiguration(
                "auth.password.min_length must be at least 1".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(CoreError::InvalidConfiguration(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
