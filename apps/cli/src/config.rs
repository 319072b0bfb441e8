//! Backend configuration from environment variables.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    MissingVar(&'static str),
}

/// Connection settings for the hosted backend.
///
/// Required env vars:
/// - VOCAB_BACKEND_URL: base URL of the hosted service
/// - VOCAB_API_KEY: project API key sent with every request
/// - VOCAB_ACCESS_TOKEN: the signed-in user's session token
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub api_key: String,
    pub access_token: String,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: require("VOCAB_BACKEND_URL")?,
            api_key: require("VOCAB_API_KEY")?,
            access_token: require("VOCAB_ACCESS_TOKEN")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_names_the_variable() {
        let err = require("VOCAB_TEST_UNSET_VAR").unwrap_err();
        assert_eq!(err.to_string(), "VOCAB_TEST_UNSET_VAR not set");
    }
}
