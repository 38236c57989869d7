mod settings;

pub use settings::{DeliveryConfig, LogConfig, ServerConfig, Settings};
