//! Optional TOML configuration for the command line tool.
//!
//! Every table may be omitted; missing values fall back to the defaults.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! stdout = true
//! file = "quote.log"
//!
//! [rates]
//! basic_base = "1000"
//! comprehensive_base = "2000"
//! accidental_death = "0.15"
//!
//! [seed.company]
//! name = "Acme Corp"
//! email = "contact@acmecorp.com"
//! industry = "tech"
//! region = "north"
//! tax_id = "00-0000000"
//! ```

use std::path::{Path, PathBuf};

use quote_core::calculations::{PremiumCalculator, PremiumRates, PremiumRatesError};
use quote_core::models::SeedProfile;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading or checking the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid premium rates: {0}")]
    Rates(#[from] PremiumRatesError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback filter directive used when `RUST_LOG` is not set.
    pub level: String,

    /// Whether log records are written to stdout.
    pub stdout: bool,

    /// Append-mode log file, if any.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            stdout: true,
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub rates: PremiumRates,
    pub seed: SeedProfile,
}

impl AppConfig {
    /// Parses configuration text and checks the premium rates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Rates`] for negative rates.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(input)?;
        config.rates.validate()?;
        Ok(config)
    }

    /// Reads `path` if given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, or any
    /// error of [`Self::from_toml_str`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Calculator for the configured rates.
    ///
    /// # Errors
    ///
    /// Returns [`PremiumRatesError`] if a rate is negative.
    pub fn calculator(&self) -> Result<PremiumCalculator, PremiumRatesError> {
        PremiumCalculator::new(self.rates.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote_core::models::Industry;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.stdout);
    }

    #[test]
    fn missing_path_yields_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_rates_keep_remaining_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [rates]
            basic_base = "1200"
            critical_illness = "0.45"
            "#,
        )
        .unwrap();

        assert_eq!(config.rates.basic_base, dec!(1200));
        assert_eq!(config.rates.critical_illness, dec!(0.45));
        assert_eq!(config.rates.comprehensive_base, dec!(2000));
    }

    #[test]
    fn logging_table_is_read() {
        let config = AppConfig::from_toml_str(
            r#"
            [logging]
            level = "debug"
            stdout = false
            file = "quote.log"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.logging,
            LoggingConfig {
                level: "debug".to_string(),
                stdout: false,
                file: Some(PathBuf::from("quote.log")),
            }
        );
    }

    #[test]
    fn seed_profile_can_be_replaced() {
        let config = AppConfig::from_toml_str(
            r#"
            [seed.company]
            name = "Umbrella"
            email = "hr@umbrella.com"
            industry = "healthcare"
            region = "asia"
            tax_id = "11-1111111"

            [seed.employee]
            coverage_count = 40
            age_range = { min = 22, max = 60 }
            salary_range = { min = "30000", max = "80000" }
            salary_bands = { min_percentage = "65", max_percentage = "35" }
            "#,
        )
        .unwrap();

        assert_eq!(config.seed.company.industry, Industry::Healthcare);
        assert_eq!(config.seed.employee.coverage_count, 40);
        assert_eq!(config.seed.employee.age_range.max(), 60);
    }

    #[test]
    fn negative_rate_is_rejected() {
        let result = AppConfig::from_toml_str(
            r#"
            [rates]
            waiver_of_premium = "-1"
            "#,
        );

        assert!(matches!(result, Err(ConfigError::Rates(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = AppConfig::from_toml_str("[logging\nlevel = ");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unreadable_file_reports_its_path() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/quote.toml"))).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/quote.toml"));
    }
}
