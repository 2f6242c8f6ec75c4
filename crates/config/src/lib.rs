//! Configuration for graphql-erd.
//!
//! Settings come from, in increasing priority: built-in defaults, the
//! nearest config file (see [`CONFIG_FILES`]), and `GRAPHQL_ERD_*`
//! environment variables. Command-line flags are applied on top by the binary.

mod config;
mod error;
mod loader;

pub use config::{
    ErdConfig, IntrospectionConfig, LabelsConfig, RenderConfig, ENV_EXPAND_ARGS,
    ENV_EXPAND_ARG_TYPES, ENV_GRAPHVIZ,
};
pub use error::{ConfigError, Result};
pub use loader::{
    find_config, load_config, load_config_from_str, resolve_config, resolve_config_with, CONFIG_FILES,
};
