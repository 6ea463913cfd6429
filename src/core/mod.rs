pub mod client;
pub mod spotter;

pub use crate::domain::model::{Coordinates, PassWindow};
pub use crate::domain::ports::{ConfigProvider, FlyoverApi};
pub use crate::utils::error::Result;
