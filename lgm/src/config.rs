//! Model and simulation configuration loaded from TOML.
//!
//! ```toml
//! log_level = "info"
//!
//! [model]
//! mean_reversion = 0.05
//! discount_rate = 0.03
//! forward_spread = 0.0
//! volatility = [[0.0, 0.01]]     # (time, sigma) breakpoints
//!
//! [simulation]
//! paths = 100000
//! seed = 42
//! mode = "step-by-step"          # or "path-by-path"
//! ```
//!
//! Every key is optional; missing keys take the [`Default`] values.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use lgm_core::{Rate, Real, Size, Spread, Time, Volatility};
use lgm_math::InverseCumulativeNormalRng;
use lgm_methods::SimulationMode;
use lgm_processes::LinearGaussianMarkov;
use lgm_termstructures::{FlatForward, PiecewiseTermStructure, SpreadedCurve, YieldCurve};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that was being read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The contents are not valid TOML for this schema.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parse but do not describe a usable model or run.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Log levels accepted in the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything, including per-run traces.
    Trace,
    /// Run parameters and diagnostics.
    Debug,
    /// One line per simulation or pricing.
    #[default]
    Info,
    /// Warnings only.
    Warn,
    /// Errors only.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::Invalid(format!(
                "log level {s:?}, expected one of trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Parse a simulation mode name (`step-by-step` or `path-by-path`).
pub fn parse_simulation_mode(s: &str) -> Result<SimulationMode, ConfigError> {
    match s.to_lowercase().replace('_', "-").as_str() {
        "step-by-step" => Ok(SimulationMode::StepByStep),
        "path-by-path" => Ok(SimulationMode::PathByPath),
        _ => Err(ConfigError::Invalid(format!(
            "simulation mode {s:?}, expected step-by-step or path-by-path"
        ))),
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_mode<'de, D>(deserializer: D) -> Result<SimulationMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_simulation_mode(&s).map_err(serde::de::Error::custom)
}

/// The `[model]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Mean reversion `λ`; any finite value, including 0 and negatives.
    pub mean_reversion: Real,
    /// Flat continuously-compounded discount rate.
    pub discount_rate: Rate,
    /// Constant spread of the forward (Libor) curve over the discount curve.
    pub forward_spread: Spread,
    /// `(time, sigma)` breakpoints of the piecewise-constant volatility.
    pub volatility: Vec<(Time, Volatility)>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            mean_reversion: 0.05,
            discount_rate: 0.03,
            forward_spread: 0.0,
            volatility: vec![(0.0, 0.01)],
        }
    }
}

/// The `[simulation]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Antithetic pairs per run; twice as many paths are stored.
    pub paths: Size,
    /// Seed of the Gaussian generator.
    pub seed: u64,
    /// Draw ordering.
    #[serde(deserialize_with = "deserialize_mode")]
    pub mode: SimulationMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            paths: 10_000,
            seed: 42,
            mode: SimulationMode::StepByStep,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LgmConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Model parameters.
    pub model: ModelConfig,
    /// Monte Carlo settings.
    pub simulation: SimulationConfig,
}

impl LgmConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LgmConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let model = &self.model;
        if self.simulation.paths == 0 {
            return Err(ConfigError::Invalid("simulation.paths must be positive".into()));
        }
        for (name, value) in [
            ("model.mean_reversion", model.mean_reversion),
            ("model.discount_rate", model.discount_rate),
            ("model.forward_spread", model.forward_spread),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite, got {value}")));
            }
        }
        if model.volatility.iter().any(|&(_, sigma)| sigma < 0.0) {
            return Err(ConfigError::Invalid("model.volatility must be non-negative".into()));
        }
        self.volatility().map(|_| ())
    }

    fn volatility(&self) -> Result<PiecewiseTermStructure, ConfigError> {
        PiecewiseTermStructure::from_pairs(&self.model.volatility)
            .map_err(|e| ConfigError::Invalid(format!("model.volatility: {e}")))
    }

    /// Build the model: a flat discount curve and, for a non-zero spread, a
    /// spreaded forward curve.
    pub fn build_model(&self) -> Result<LinearGaussianMarkov, ConfigError> {
        self.validate()?;
        let model = &self.model;
        let discount: Arc<dyn YieldCurve> = Arc::new(FlatForward::new(model.discount_rate));
        let mut lgm =
            LinearGaussianMarkov::new(Arc::clone(&discount), model.mean_reversion, self.volatility()?);
        if model.forward_spread != 0.0 {
            lgm = lgm.with_forward_curve(Arc::new(SpreadedCurve::with_constant_spread(
                discount,
                model.forward_spread,
            )));
        }
        debug!(
            mean_reversion = model.mean_reversion,
            discount_rate = model.discount_rate,
            forward_spread = model.forward_spread,
            breakpoints = model.volatility.len(),
            "model built from configuration"
        );
        Ok(lgm)
    }

    /// A Gaussian generator seeded from `simulation.seed`.
    pub fn build_rng(&self) -> InverseCumulativeNormalRng {
        InverseCumulativeNormalRng::new(self.simulation.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lgm_processes::CurveName;

    #[test]
    fn test_default_config() {
        let config = LgmConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.model.mean_reversion, 0.05);
        assert_eq!(config.model.volatility, vec![(0.0, 0.01)]);
        assert_eq!(config.simulation.paths, 10_000);
        assert_eq!(config.simulation.mode, SimulationMode::StepByStep);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("verbose").is_err());
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(
            parse_simulation_mode("path-by-path").unwrap(),
            SimulationMode::PathByPath
        );
        assert_eq!(
            parse_simulation_mode("Step_By_Step").unwrap(),
            SimulationMode::StepByStep
        );
        assert!(parse_simulation_mode("random").is_err());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(LgmConfig::from_toml_str("").unwrap(), LgmConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = LgmConfig::from_toml_str(
            r#"
            log_level = "debug"

            [model]
            mean_reversion = -0.01
            discount_rate = 0.02
            forward_spread = 0.005
            volatility = [[0.0, 0.012], [2.0, 0.008]]

            [simulation]
            paths = 500
            seed = 7
            mode = "path-by-path"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.model.volatility, vec![(0.0, 0.012), (2.0, 0.008)]);
        assert_eq!(config.simulation.mode, SimulationMode::PathByPath);

        let model = config.build_model().unwrap();
        assert_eq!(model.mean_reversion(), -0.01);
        assert!(model.volatility().is_term_structure());
        let spread = model.curve(CurveName::Forward).zero_rate(1.0)
            - model.curve(CurveName::Discount).zero_rate(1.0);
        assert!((spread - 0.005).abs() < 1e-15);
    }

    #[test]
    fn test_rejects_invalid_values() {
        for doc in [
            "[simulation]\npaths = 0",
            "[model]\nvolatility = []",
            "[model]\nvolatility = [[1.0, 0.01], [0.5, 0.02]]",
            "[model]\nvolatility = [[0.0, -0.01]]",
            "[model]\nmean_reversion = nan",
        ] {
            assert!(
                matches!(LgmConfig::from_toml_str(doc), Err(ConfigError::Invalid(_))),
                "{doc}"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            LgmConfig::from_toml_str("[model]\nmean_reversion = \"fast\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            LgmConfig::from_toml_str("[model]\nlambda = 0.1"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            LgmConfig::from_toml_str("log_level = \"loud\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
