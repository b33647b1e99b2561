//! Configuration: TOML file under the platform config dir, overridable from
//! the command line.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EndpointConfig, UiConfig};
