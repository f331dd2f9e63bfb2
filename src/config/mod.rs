use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CorsError, Result};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};

pub const DOMAIN_NAME_ENV: &str = "DOMAIN_NAME";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://www.example.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl CorsConfig {
    pub fn new(allowed_origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: allowed_origin.into(),
        }
    }

    /// Builds the config from an arbitrary key lookup. Values are taken verbatim.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_origin(lookup(DOMAIN_NAME_ENV))
    }

    pub fn try_from_env() -> Result<Self> {
        match env::var(DOMAIN_NAME_ENV) {
            Ok(origin) => Ok(Self::from_origin(Some(origin))),
            Err(VarError::NotPresent) => Ok(Self::from_origin(None)),
            Err(VarError::NotUnicode(raw)) => Err(CorsError::ConfigError {
                message: format!("{} is not valid unicode: {:?}", DOMAIN_NAME_ENV, raw),
            }),
        }
    }

    /// Never fails: an unreadable `DOMAIN_NAME` falls back to the default origin.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|e| {
            tracing::warn!(
                "⚠️ {}, falling back to {}",
                e,
                DEFAULT_ALLOWED_ORIGIN
            );
            Self::default()
        })
    }

    fn from_origin(origin: Option<String>) -> Self {
        origin.map(Self::new).unwrap_or_default()
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGIN)
    }
}

impl ConfigProvider for CorsConfig {
    fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }
}
