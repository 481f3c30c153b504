//! # Ballast Configuration
//!
//! Loads the engine's tuning constants from `config.toml` and the
//! environment, and installs the global `tracing` subscriber.
//!
//! Every value has a default, so the config file is optional.

use crate::error::ConfigError;
use config::{Environment, File, FileFormat};

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{LoggingSettings, OptimizerSettings, RiskSettings, Settings};

/// Prefix for environment overrides, e.g. `BALLAST__OPTIMIZER__MAX_ITERATIONS=80`.
pub const ENV_PREFIX: &str = "BALLAST";

/// Loads the application configuration from the `config.toml` file.
///
/// The file is optional. Environment variables prefixed with `BALLAST__`
/// override values from the file. The result is validated before it is
/// returned.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(File::with_name("config.toml").required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}

/// Parses settings from TOML text without touching the file system or environment.
pub fn load_config_from_str(toml: &str) -> Result<Settings, ConfigError> {
    let settings = config::Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_config_uses_builtin_defaults() {
        let settings = load_config_from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.optimizer.max_iterations, 50);
        assert_eq!(settings.optimizer.learning_rate, dec!(0.1));
        assert_eq!(settings.optimizer.finite_difference_step, dec!(0.000001));
        assert_eq!(settings.optimizer.convergence_tolerance, dec!(0.0001));
        assert_eq!(settings.optimizer.diversified_min_weight, dec!(0.02));
        assert_eq!(settings.risk.default_correlation, dec!(0.2));
        assert_eq!(settings.logging.level, "info");
        assert!(settings.logging.directory.is_none());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let settings = load_config_from_str(
            r#"
            [optimizer]
            max_iterations = 120

            [logging]
            level = "debug"
            directory = "logs"
            "#,
        )
        .unwrap();

        assert_eq!(settings.optimizer.max_iterations, 120);
        assert_eq!(settings.optimizer.learning_rate, dec!(0.1));
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.directory.as_deref(), Some(std::path::Path::new("logs")));
        assert_eq!(settings.logging.file_prefix, "ballast.log");
    }

    #[test]
    fn decimal_fields_parse_from_toml_strings() {
        let settings = load_config_from_str(
            r#"
            [risk]
            default_correlation = "0.35"
            "#,
        )
        .unwrap();
        assert_eq!(settings.risk.default_correlation, dec!(0.35));
    }

    #[test]
    fn zero_iterations_are_rejected() {
        let err = load_config_from_str("[optimizer]\nmax_iterations = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut settings = Settings::default();
        settings.risk.default_correlation = dec!(1.5);
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.optimizer.diversified_min_weight = dec!(0.25);
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.optimizer.learning_rate = dec!(0);
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.logging.file_prefix = "  ".to_string();
        assert!(settings.validate().is_err());
    }
}
