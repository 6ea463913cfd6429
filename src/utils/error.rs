use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotterError {
    /// Transport-level failure: unreachable host, DNS failure, connection
    /// drop. The request never completed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The host was reachable but the application-level outcome was wrong:
    /// unexpected status code or an explicit failure indicator in the body.
    #[error("service error: {message}")]
    Service { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SpotterError>;
