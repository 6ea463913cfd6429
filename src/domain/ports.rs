use crate::domain::model::{Coordinates, PassWindow};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn ip_endpoint(&self) -> &str;
    fn geo_endpoint(&self) -> &str;
    fn flyover_endpoint(&self) -> &str;
}

/// The three upstream lookups the spotter chains together. Each is a single
/// HTTP GET against one external service; implementations surface their own
/// errors verbatim to the caller.
#[async_trait]
pub trait FlyoverApi: Send + Sync {
    async fn fetch_my_ip(&self) -> Result<String>;
    async fn fetch_coords_by_ip(&self, ip: &str) -> Result<Coordinates>;
    async fn fetch_flyover_times(&self, coords: Coordinates) -> Result<Vec<PassWindow>>;
}
