use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};

const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org";
const DEFAULT_GEO_ENDPOINT: &str = "http://ipwho.is";
const DEFAULT_FLYOVER_ENDPOINT: &str = "https://iss-flyover.herokuapp.com/json/";

/// Base URLs of the three upstream services. Defaults point at the real
/// services; each can be overridden through the environment, which is also
/// how tests aim the client at a mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotterConfig {
    pub ip_endpoint: String,
    pub geo_endpoint: String,
    pub flyover_endpoint: String,
}

impl Default for SpotterConfig {
    fn default() -> Self {
        Self {
            ip_endpoint: DEFAULT_IP_ENDPOINT.to_string(),
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            flyover_endpoint: DEFAULT_FLYOVER_ENDPOINT.to_string(),
        }
    }
}

impl SpotterConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ip_endpoint: std::env::var("ISS_IP_ENDPOINT").unwrap_or(defaults.ip_endpoint),
            geo_endpoint: std::env::var("ISS_GEO_ENDPOINT").unwrap_or(defaults.geo_endpoint),
            flyover_endpoint: std::env::var("ISS_FLYOVER_ENDPOINT")
                .unwrap_or(defaults.flyover_endpoint),
        }
    }
}

impl Validate for SpotterConfig {
    fn validate(&self) -> Result<()> {
        validate_url("ip_endpoint", &self.ip_endpoint)?;
        validate_url("geo_endpoint", &self.geo_endpoint)?;
        validate_url("flyover_endpoint", &self.flyover_endpoint)?;
        Ok(())
    }
}

impl ConfigProvider for SpotterConfig {
    fn ip_endpoint(&self) -> &str {
        &self.ip_endpoint
    }

    fn geo_endpoint(&self) -> &str {
        &self.geo_endpoint
    }

    fn flyover_endpoint(&self) -> &str {
        &self.flyover_endpoint
    }
}
