//! API configuration

use chrono::NaiveDate;
use serde::Deserialize;

use core_kernel::{calendar, CoreError};
use domain_staff::validation::{MAX_SERVICE_AGE, MIN_SERVICE_AGE};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Age at which staff retire
    pub retirement_age: u32,
    /// Office named on print-outs
    pub office_name: String,
    /// Pins the working date instead of reading the clock
    #[serde(default)]
    pub fixed_date: Option<NaiveDate>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            retirement_age: calendar::DEFAULT_RETIREMENT_AGE,
            office_name: "Divisional Forest Office - Vavuniya".to_string(),
            fixed_date: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `STAFF_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port)?
            .set_default("log_level", defaults.log_level)?
            .set_default("retirement_age", defaults.retirement_age)?
            .set_default("office_name", defaults.office_name)?
            .add_source(config::Environment::with_prefix("STAFF").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Rejects settings the staff rules cannot work with
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(MIN_SERVICE_AGE..=MAX_SERVICE_AGE).contains(&self.retirement_age) {
            return Err(CoreError::configuration(format!(
                "retirement_age must be between {MIN_SERVICE_AGE} and {MAX_SERVICE_AGE}, got {}",
                self.retirement_age
            )));
        }
        if self.office_name.trim().is_empty() {
            return Err(CoreError::configuration("office_name must not be empty"));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The date derivations are computed against
    pub fn today(&self) -> NaiveDate {
        self.fixed_date.unwrap_or_else(calendar::today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ApiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_retirement_age_bounds() {
        let config = ApiConfig {
            retirement_age: 75,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("retirement_age"));
    }

    #[test]
    fn test_fixed_date_wins() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let config = ApiConfig {
            fixed_date: Some(date),
            ..Default::default()
        };
        assert_eq!(config.today(), date);
    }
}
