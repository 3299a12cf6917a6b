//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "changelist.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "changelist.toml";

/// Alternative configuration file name (YAML)
pub const ALT_CONFIG_FILE: &str = ".changelist.yaml";

/// Alternative configuration file name (TOML)
pub const ALT_CONFIG_TOML: &str = ".changelist.toml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ALT_CONFIG_TOML,
    ]
}
