mod error;
mod loader;
mod settings;
mod validate;


pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_HCL, load_config, parse_config, read_config, write_default_config};
pub use settings::{AlertConfig, ReaderConfig, StatsConfig, WatchConfig};
pub use validate::validate_config;
