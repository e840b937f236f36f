//! Harvest configuration.

mod builder;
mod types;

pub use builder::{HarvestConfigBuilder, WithHubUrl, WithStorageDir};
pub use types::HarvestConfig;
