//! Runtime configuration for the assistant shell.
//!
//! The rule core needs no configuration; these settings only shape the
//! conversation boundary (history length, log output, optional generative
//! collaborator).

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use url::Url;
use validator::Validate;

use crate::error::AppError;

pub const ENV_HISTORY_TURNS: &str = "HEALTHCHAT_HISTORY_TURNS";
pub const ENV_LOG_FORMAT: &str = "HEALTHCHAT_LOG_FORMAT";
pub const ENV_GENERATIVE_URL: &str = "HEALTHCHAT_GENERATIVE_URL";
pub const ENV_GENERATIVE_MODEL: &str = "HEALTHCHAT_GENERATIVE_MODEL";
pub const ENV_GENERATIVE_TIMEOUT_SECS: &str = "HEALTHCHAT_GENERATIVE_TIMEOUT_SECS";
pub const ENV_GENERATIVE_RETRIES: &str = "HEALTHCHAT_GENERATIVE_RETRIES";
pub const ENV_GENERATIVE_TOKEN: &str = "HEALTHCHAT_GENERATIVE_TOKEN";

const DEFAULT_HISTORY_TURNS: usize = 4;
const DEFAULT_MODEL: &str = "default-model";

/// Output layer installed by [`crate::telemetry::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!("Unknown log format '{}'", other))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Bunyan => "bunyan",
        };
        f.write_str(name)
    }
}

/// Settings for the optional HTTP text-generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerativeConfig {
    /// Base URL; requests go to `<endpoint>/completion`.
    #[validate(length(min = 1))]
    pub endpoint: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: f32,
    #[validate(range(min = 1, max = 4096))]
    pub max_tokens: u32,
    /// Per-attempt timeout.
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
    /// Extra attempts after the first failure.
    #[validate(range(max = 5))]
    pub max_retries: u32,
    #[serde(default, skip_serializing)]
    pub auth_token: Option<String>,
}

impl GenerativeConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 800,
            timeout_secs: 30,
            max_retries: 1,
            auth_token: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `<endpoint>/completion`, tolerating a trailing slash on the base URL.
    pub fn completion_url(&self) -> Result<Url, AppError> {
        let base = Url::parse(self.endpoint.trim_end_matches('/'))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Generative endpoint must be http(s), got '{}'",
                base.scheme()
            )));
        }
        Ok(Url::parse(&format!("{}/completion", base.as_str().trim_end_matches('/')))?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssistantConfig {
    /// Conversation turns kept for collaborator context (user + assistant = one turn).
    #[validate(range(min = 1, max = 20))]
    pub history_turns: usize,
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default)]
    pub generative: Option<GenerativeConfig>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            history_turns: DEFAULT_HISTORY_TURNS,
            log_format: LogFormat::default(),
            generative: None,
        }
    }
}

fn read_var(key: &str) -> Result<Option<String>, AppError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(AppError::Config(format!("{} is not valid unicode", key))),
    }
}

fn parse_var<T: FromStr>(key: &str) -> Result<Option<T>, AppError> {
    read_var(key)?
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| AppError::Config(format!("{} has an invalid value '{}'", key, raw)))
        })
        .transpose()
}

impl AssistantConfig {
    /// Loads `.env` (if present) and overlays the `HEALTHCHAT_*` variables on the defaults.
    pub fn from_env() -> Result<Self, AppError> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_vars()
    }

    /// Same as [`from_env`](Self::from_env) without touching `.env`.
    pub fn from_vars() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(turns) = parse_var::<usize>(ENV_HISTORY_TURNS)? {
            config.history_turns = turns;
        }
        if let Some(format) = read_var(ENV_LOG_FORMAT)? {
            config.log_format = format.parse()?;
        }

        if let Some(endpoint) = read_var(ENV_GENERATIVE_URL)? {
            let mut generative = GenerativeConfig::new(endpoint);
            if let Some(model) = read_var(ENV_GENERATIVE_MODEL)? {
                generative.model = model;
            }
            if let Some(secs) = parse_var::<u64>(ENV_GENERATIVE_TIMEOUT_SECS)? {
                generative.timeout_secs = secs;
            }
            if let Some(retries) = parse_var::<u32>(ENV_GENERATIVE_RETRIES)? {
                generative.max_retries = retries;
            }
            generative.auth_token = read_var(ENV_GENERATIVE_TOKEN)?;
            config.generative = Some(generative);
        }

        config.check()?;
        Ok(config)
    }

    /// Field ranges plus a parsable collaborator endpoint.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        if let Some(generative) = &self.generative {
            generative.validate()?;
            generative.completion_url()?;
        }
        Ok(())
    }

    /// Maximum entries kept in the rolling history.
    pub fn history_capacity(&self) -> usize {
        self.history_turns * 2
    }
}
