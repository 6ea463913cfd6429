pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::SpotterConfig;
pub use core::{client::IssClient, spotter::Spotter};
pub use domain::model::{Coordinates, PassWindow};
pub use domain::ports::{ConfigProvider, FlyoverApi};
pub use utils::error::{Result, SpotterError};
