//! Layered configuration: defaults, then a TOML file named by
//! `STAYBOT_CONFIG`, then `STAYBOT_*` environment variables. Command-line
//! flags are applied last by the individual commands, so the time budget is
//! only validated once the flag has been resolved (see [`budget_duration`]).

use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
use thiserror::Error;

pub const ENV_CONFIG: &str = "STAYBOT_CONFIG";
pub const ENV_SEED: &str = "STAYBOT_SEED";
pub const ENV_TIME_BUDGET: &str = "STAYBOT_TIME_BUDGET";
pub const ENV_LOG_PATH: &str = "STAYBOT_LOG_PATH";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Wall-clock budget per decision, in seconds
    pub time_budget_secs: f64,
    pub seed: Option<u64>,
    /// JSONL file receiving one record per decision
    pub log_path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub time_budget_secs: ValueSource,
    pub seed: ValueSource,
    pub log_path: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            time_budget_secs: ValueSource::Default,
            seed: ValueSource::Default,
            log_path: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_budget_secs: 9.5,
            seed: None,
            log_path: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.time_budget_secs {
            cfg.time_budget_secs = v;
            sources.time_budget_secs = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.log_path {
            cfg.log_path = Some(v);
            sources.log_path = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {seed:?}")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(budget) = std::env::var(ENV_TIME_BUDGET)
        && !budget.is_empty()
    {
        cfg.time_budget_secs = budget
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid time budget: {budget:?}")))?;
        sources.time_budget_secs = ValueSource::Env;
    }
    if let Ok(path) = std::env::var(ENV_LOG_PATH)
        && !path.is_empty()
    {
        cfg.log_path = Some(path);
        sources.log_path = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    time_budget_secs: Option<f64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log_path: Option<String>,
}

/// Converts a budget in seconds to a `Duration`. It must be finite, above
/// zero and small enough to be represented.
pub fn budget_duration(secs: f64) -> Result<Duration, ConfigError> {
    let invalid = || {
        ConfigError::Invalid(format!(
            "Invalid configuration: time budget must be a positive number of seconds, got {secs}"
        ))
    };
    if !secs.is_finite() || secs <= 0.0 {
        return Err(invalid());
    }
    Duration::try_from_secs_f64(secs).map_err(|_| invalid())
}
