use std::env;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::constants::api;
use crate::errors::GeneratorError;
use crate::record::RawAnimal;
use crate::source::AnimalSource;
use crate::types::SourceId;

/// Configuration for the remote animals-API source.
#[derive(Clone, Debug)]
pub struct ApiSourceConfig {
    /// Stable source id used in errors and logging.
    pub source_id: SourceId,
    /// Endpoint URL.
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ApiSourceConfig {
    /// Create a config with the default endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            source_id: "animals_api".to_string(),
            base_url: api::DEFAULT_URL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(api::TIMEOUT_SECS),
        }
    }

    /// Create a config with the key taken from the environment.
    pub fn from_env() -> Result<Self, GeneratorError> {
        let key = env::var(api::KEY_ENV).map_err(|_| {
            GeneratorError::Configuration(format!("environment variable {} is not set", api::KEY_ENV))
        })?;
        Ok(Self::new(key))
    }

    /// Override the endpoint URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking HTTP source backed by the animals API.
///
/// One request per fetch, no retries; transport failures, non-success
/// statuses, and undecodable payloads all surface as an unavailable source
/// for the caller to map to the empty-dataset path.
pub struct ApiSource {
    config: ApiSourceConfig,
    client: Client,
}

impl ApiSource {
    /// Build a source (and its HTTP client) from configuration.
    pub fn new(config: ApiSourceConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| GeneratorError::SourceUnavailable {
                source_id: config.source_id.clone(),
                reason: format!("failed building HTTP client: {err}"),
            })?;
        Ok(Self { config, client })
    }

    fn unavailable(&self, reason: String) -> GeneratorError {
        GeneratorError::SourceUnavailable {
            source_id: self.config.source_id.clone(),
            reason,
        }
    }
}

impl AnimalSource for ApiSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn fetch(&self, query: &str) -> Result<Vec<RawAnimal>, GeneratorError> {
        debug!(source = %self.config.source_id, query, "fetching animal records");
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[(api::NAME_PARAM, query)])
            .header(api::KEY_HEADER, self.config.api_key.as_str())
            .send()
            .map_err(|err| self.unavailable(format!("request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.unavailable(format!("endpoint returned status {status}")));
        }

        let animals: Vec<RawAnimal> = response
            .json()
            .map_err(|err| self.unavailable(format!("undecodable payload: {err}")))?;
        info!(
            source = %self.config.source_id,
            query,
            records = animals.len(),
            "fetched animal records"
        );
        Ok(animals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_point_at_the_animals_api() {
        let config = ApiSourceConfig::new("secret");
        assert_eq!(config.base_url, api::DEFAULT_URL);
        assert_eq!(config.timeout, Duration::from_secs(api::TIMEOUT_SECS));
    }

    #[test]
    fn builders_override_endpoint_and_timeout() {
        let config = ApiSourceConfig::new("secret")
            .with_base_url("http://localhost:9000/animals")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.base_url, "http://localhost:9000/animals");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
