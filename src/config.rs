use std::time::Duration;

use crate::error::config::ConfigError;

/// Runtime configuration read from the environment.
pub struct Config {
    pub application_id: String,
    /// Application access token, either issued or derived as `{app_id}|{app_secret}`.
    pub access_token: String,
    pub graph_url: Option<String>,
    pub graph_version: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `FACEBOOK_APPLICATION_ID` or both of
    ///   `FACEBOOK_ACCESS_TOKEN`/`FACEBOOK_APPLICATION_SECRET` are missing
    /// - `Err(ConfigError::InvalidEnvValue)` - `FACEBOOK_REQUEST_TIMEOUT` is not a positive
    ///   number of seconds
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset so an empty line in `.env` doesn't shadow a default.
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required =
            |key: &str| var(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let application_id = required("FACEBOOK_APPLICATION_ID")?;

        let access_token = match var("FACEBOOK_ACCESS_TOKEN") {
            Some(token) => token,
            None => {
                let secret = required("FACEBOOK_APPLICATION_SECRET")?;
                format!("{}|{}", application_id, secret)
            }
        };

        let request_timeout = match var("FACEBOOK_REQUEST_TIMEOUT") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(seconds) if seconds > 0 => Some(Duration::from_secs(seconds)),
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "FACEBOOK_REQUEST_TIMEOUT".to_string(),
                        reason: format!("expected a positive number of seconds, got {:?}", raw),
                    })
                }
            },
            None => None,
        };

        Ok(Self {
            application_id,
            access_token,
            graph_url: var("FACEBOOK_GRAPH_URL"),
            graph_version: var("FACEBOOK_GRAPH_VERSION"),
            request_timeout,
        })
    }
}
