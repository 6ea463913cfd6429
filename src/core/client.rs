use crate::core::{ConfigProvider, Coordinates, FlyoverApi, PassWindow, Result};
use crate::utils::error::SpotterError;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// HTTP client for the three upstream services. One GET per lookup, no
/// retries; the transport's own defaults govern timeouts.
pub struct IssClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> IssClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpBody {
    ip: String,
}

#[derive(Debug, Deserialize)]
struct GeoBody {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct FlyoverBody {
    response: Vec<PassWindow>,
}

#[async_trait::async_trait]
impl<C: ConfigProvider> FlyoverApi for IssClient<C> {
    async fn fetch_my_ip(&self) -> Result<String> {
        tracing::debug!("Making IP request to: {}", self.config.ip_endpoint());
        let response = self
            .client
            .get(self.config.ip_endpoint())
            .query(&[("format", "json")])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("IP response status: {}", status);

        if status != StatusCode::OK {
            return Err(SpotterError::Service {
                message: format!("status code {} when fetching IP", status.as_u16()),
            });
        }

        let body: IpBody = response.json().await?;
        Ok(body.ip)
    }

    async fn fetch_coords_by_ip(&self, ip: &str) -> Result<Coordinates> {
        let url = format!("{}/{}", self.config.geo_endpoint().trim_end_matches('/'), ip);
        tracing::debug!("Making geolocation request to: {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::debug!("Geolocation response status: {}", status);

        // The body's own success flag is checked before the status code; if
        // both indicate failure the flag's message wins. A body that is not
        // valid JSON has no flag to consult, so a bad status speaks for
        // itself there.
        let bytes = response.bytes().await?;
        let body: GeoBody = match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(e) => {
                if status != StatusCode::OK {
                    return Err(SpotterError::Service {
                        message: format!(
                            "status code {} when fetching coords for IP {}",
                            status.as_u16(),
                            ip
                        ),
                    });
                }
                return Err(e.into());
            }
        };
        if !body.success {
            let message = body
                .message
                .unwrap_or_else(|| "no message from server".to_string());
            return Err(SpotterError::Service {
                message: format!(
                    "success was false when fetching coords for IP {}: {}",
                    ip, message
                ),
            });
        }

        if status != StatusCode::OK {
            return Err(SpotterError::Service {
                message: format!(
                    "status code {} when fetching coords for IP {}",
                    status.as_u16(),
                    ip
                ),
            });
        }

        match (body.latitude, body.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(SpotterError::Service {
                message: format!("geolocation payload for IP {} is missing coordinates", ip),
            }),
        }
    }

    async fn fetch_flyover_times(&self, coords: Coordinates) -> Result<Vec<PassWindow>> {
        tracing::debug!(
            "Making flyover request to: {} for {:?}",
            self.config.flyover_endpoint(),
            coords
        );
        let response = self
            .client
            .get(self.config.flyover_endpoint())
            .query(&[("lat", coords.latitude), ("lon", coords.longitude)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Flyover response status: {}", status);

        if status != StatusCode::OK {
            return Err(SpotterError::Service {
                message: format!("status code {} when fetching flyover times", status.as_u16()),
            });
        }

        // The list is passed through verbatim; ordering is the upstream
        // service's responsibility.
        let body: FlyoverBody = response.json().await?;
        Ok(body.response)
    }
}
