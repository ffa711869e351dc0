mod config_store;
mod solver_config;

pub use config_store::{ConfigError, Validate, YamlConfigStore};
pub use solver_config::{SolverConfig, open_config_store};
