// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration management for the weekly goals tracker
//!
//! Configuration comes from a TOML file when one exists, otherwise from
//! environment variables (with `.env` support). Either way the result is
//! validated once at startup and then passed around as an immutable value.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

use crate::constants::{api, cache, cli, env_vars};
use crate::goals::GoalTarget;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required configuration value: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{0} must be a non-negative number, got {1}")]
    NegativeGoal(&'static str, f64),

    #[error("Activities per page must be at least 1")]
    ZeroPageSize,

    #[error("Cache max age must be at most {max} minutes, got {0}", max = cache::MAX_AGE_MINUTES)]
    CacheAgeOutOfRange(u64),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub strava: StravaConfig,
    #[serde(default)]
    pub goals: GoalTarget,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StravaConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    pub max_age_minutes: u64,
    /// Overrides the default `~/.strava-goals-cache`
    pub directory: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_age_minutes: cache::DEFAULT_MAX_AGE_MINUTES,
            directory: None,
        }
    }
}

impl CacheConfig {
    /// Max age as a duration, capped at [`cache::MAX_AGE_MINUTES`]
    pub fn max_age(&self) -> chrono::Duration {
        let minutes = self.max_age_minutes.min(cache::MAX_AGE_MINUTES);
        chrono::Duration::minutes(minutes as i64)
    }

    pub fn resolve_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(cache::CACHE_DIR_NAME)
        })
    }
}

fn default_api_base() -> String {
    api::STRAVA_API_BASE.to_string()
}

fn default_token_url() -> String {
    api::STRAVA_TOKEN_URL.to_string()
}

fn default_per_page() -> usize {
    api::DEFAULT_PER_PAGE
}

impl Config {
    /// Load from a TOML file if present, otherwise from the environment
    pub fn load(path: Option<String>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`Config::load`], reading variables through `lookup` when no file exists
    pub fn load_with<F>(path: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = path.is_some();
        let config_path = path.unwrap_or_else(|| {
            dirs::config_dir()
                .map(|p| p.join(cli::CONFIG_FILE_PATH))
                .unwrap_or_else(|| "config.toml".into())
                .to_string_lossy()
                .to_string()
        });

        if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {}", config_path))?;
            Self::from_toml_str(&content)
        } else {
            if explicit {
                warn!(path = %config_path, "Config file not found, reading environment instead");
            }
            dotenv::dotenv().ok();
            Ok(Self::from_lookup(lookup)?)
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from a key lookup, normally `std::env::var`
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let strava = StravaConfig {
            client_id: required(env_vars::STRAVA_CLIENT_ID)?,
            client_secret: required(env_vars::STRAVA_CLIENT_SECRET)?,
            refresh_token: required(env_vars::STRAVA_REFRESH_TOKEN)?,
            api_base: get(env_vars::STRAVA_API_BASE).unwrap_or_else(default_api_base),
            token_url: get(env_vars::STRAVA_TOKEN_URL).unwrap_or_else(default_token_url),
            per_page: parse_or(
                env_vars::STRAVA_ACTIVITIES_PER_PAGE,
                get(env_vars::STRAVA_ACTIVITIES_PER_PAGE),
                api::DEFAULT_PER_PAGE,
            )?,
        };

        let goals = GoalTarget::new(
            parse_or(
                env_vars::WEEKLY_RUNNING_GOAL_KM,
                get(env_vars::WEEKLY_RUNNING_GOAL_KM),
                crate::goals::DEFAULT_RUNNING_GOAL_KM,
            )?,
            parse_or(
                env_vars::WEEKLY_WORKOUT_GOAL_HOURS,
                get(env_vars::WEEKLY_WORKOUT_GOAL_HOURS),
                crate::goals::DEFAULT_WORKOUT_GOAL_HOURS,
            )?,
        );

        let cache = CacheConfig {
            max_age_minutes: parse_or(
                env_vars::CACHE_MAX_AGE_MINUTES,
                get(env_vars::CACHE_MAX_AGE_MINUTES),
                cache::DEFAULT_MAX_AGE_MINUTES,
            )?,
            directory: get(env_vars::CACHE_DIR).map(PathBuf::from),
        };

        let config = Config {
            strava,
            goals,
            cache,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strava.client_id.trim().is_empty() {
            return Err(ConfigError::Missing(env_vars::STRAVA_CLIENT_ID));
        }
        if self.strava.client_secret.trim().is_empty() {
            return Err(ConfigError::Missing(env_vars::STRAVA_CLIENT_SECRET));
        }
        if self.strava.refresh_token.trim().is_empty() {
            return Err(ConfigError::Missing(env_vars::STRAVA_REFRESH_TOKEN));
        }
        if self.strava.per_page == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.cache.max_age_minutes > cache::MAX_AGE_MINUTES {
            return Err(ConfigError::CacheAgeOutOfRange(self.cache.max_age_minutes));
        }
        check_goal(env_vars::WEEKLY_RUNNING_GOAL_KM, self.goals.running_goal_km)?;
        check_goal(env_vars::WEEKLY_WORKOUT_GOAL_HOURS, self.goals.workout_goal_hours)?;
        Ok(())
    }
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => match raw.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::InvalidNumber { key, value: raw }),
        },
    }
}

fn check_goal(key: &'static str, value: f64) -> Result<(), ConfigError> {
    // Also rejects NaN
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeGoal(key, value))
    }
}
