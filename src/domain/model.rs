use serde::{Deserialize, Serialize};

/// Latitude/longitude pair resolved for an IP address. Values are trusted
/// verbatim from upstream; no range validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One predicted overhead pass of the satellite, as reported by the flyover
/// service. `rise_time` is epoch seconds; `duration` is the visibility
/// window in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassWindow {
    #[serde(rename = "risetime")]
    pub rise_time: i64,
    pub duration: u64,
}
