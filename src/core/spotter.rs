use crate::core::{FlyoverApi, PassWindow, Result};

/// Drives the lookup chain: public IP, then coordinates for that IP, then
/// flyover times for those coordinates. The first failing stage's error is
/// relayed unchanged and later stages are never invoked.
pub struct Spotter<A: FlyoverApi> {
    api: A,
}

impl<A: FlyoverApi> Spotter<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn run(&self) -> Result<Vec<PassWindow>> {
        tracing::debug!("Resolving public IP");
        let ip = self.api.fetch_my_ip().await?;

        tracing::debug!("Resolved IP {}, resolving coordinates", ip);
        let coords = self.api.fetch_coords_by_ip(&ip).await?;

        tracing::debug!("Resolved {:?}, fetching flyover times", coords);
        let passes = self.api.fetch_flyover_times(coords).await?;

        tracing::debug!("Received {} flyover windows", passes.len());
        Ok(passes)
    }
}
