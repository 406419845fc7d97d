use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{env, fmt, str::FromStr};
use thiserror::Error;
use validator::{Validate, ValidationError};

lazy_static! {
    static ref NAME_PREFIX: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Separator used between literal labels of a node: `(:A:B)` or `(:A&B)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelOperator {
    #[default]
    #[serde(rename = ":")]
    Colon,
    #[serde(rename = "&")]
    Ampersand,
}

impl LabelOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelOperator::Colon => ":",
            LabelOperator::Ampersand => "&",
        }
    }
}

impl fmt::Display for LabelOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("label operator must be ':' or '&' (got '{0}')")]
pub struct InvalidLabelOperator(String);

impl FromStr for LabelOperator {
    type Err = InvalidLabelOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ":" => Ok(LabelOperator::Colon),
            "&" => Ok(LabelOperator::Ampersand),
            other => Err(InvalidLabelOperator(other.to_string())),
        }
    }
}

/// Naming and rendering configuration for one compilation
#[derive(Clone, Debug, PartialEq, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Prefix for generated variable names (`this0`, `this1`, ...)
    #[validate(
        length(min = 1, message = "Variable prefix cannot be empty"),
        custom(function = "validate_name_prefix")
    )]
    pub prefix: String,

    /// Prefix for generated parameter names (`param0`, `param1`, ...)
    #[validate(
        length(min = 1, message = "Parameter prefix cannot be empty"),
        custom(function = "validate_name_prefix")
    )]
    pub param_prefix: String,

    /// Separator between literal node labels
    pub label_operator: LabelOperator,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            prefix: "this".to_string(),
            param_prefix: "param".to_string(),
            label_operator: LabelOperator::Colon,
        }
    }
}

fn validate_name_prefix(prefix: &str) -> Result<(), ValidationError> {
    if prefix.is_empty() || NAME_PREFIX.is_match(prefix) {
        // emptiness is reported by the length rule
        Ok(())
    } else {
        Err(ValidationError::new("name_prefix")
            .with_message("Prefix must be a plain identifier".into()))
    }
}

impl EnvironmentConfig {
    /// Create configuration from environment variables with validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            prefix: env::var("CYPHER_PATTERN_PREFIX").unwrap_or_else(|_| "this".to_string()),
            param_prefix: env::var("CYPHER_PATTERN_PARAM_PREFIX")
                .unwrap_or_else(|_| "param".to_string()),
            label_operator: parse_env_var("CYPHER_PATTERN_LABEL_OPERATOR", ":")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from YAML file
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            field: "yaml_file".to_string(),
            value: "file read failed".to_string(),
            source: Box::new(e),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            field: "yaml_content".to_string(),
            value: content,
            source: Box::new(e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate and return the configuration
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Apply explicit overrides on top of this configuration and validate
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(prefix) = overrides.prefix {
            self.prefix = prefix;
        }
        if let Some(param_prefix) = overrides.param_prefix {
            self.param_prefix = param_prefix;
        }
        if let Some(label_operator) = overrides.label_operator {
            self.label_operator = label_operator;
        }
        self.validated()
    }

    /// Load from a YAML file when given, otherwise from environment variables,
    /// then apply overrides
    pub fn load<P: AsRef<std::path::Path>>(
        yaml_file: Option<P>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let base = match yaml_file {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::from_env()?,
        };
        base.with_overrides(overrides)
    }
}

/// Explicitly supplied values (e.g. command-line flags); `None` keeps the base value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub prefix: Option<String>,
    pub param_prefix: Option<String>,
    pub label_operator: Option<LabelOperator>,
}

/// Parse an environment variable with a default value
fn parse_env_var<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = env::var(key).unwrap_or_else(|_| default.to_string());
    value.parse().map_err(|e| ConfigError::Parse {
        field: key.to_string(),
        value,
        source: Box::new(e),
    })
}
