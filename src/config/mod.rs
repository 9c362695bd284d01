mod manager;

pub use manager::{
    ConfigFile, ConfigManager, EsgenConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
