//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// At each directory level the search checks:
///   1. `<dir>/<name>`          (e.g. `changelist.toml`)
///   2. `<dir>/.github/<name>`  (e.g. `.github/changelist.toml`)
///
/// The first match wins. Parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.exists() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration, falling back to defaults when no file exists.
///
/// A config file that exists but fails to parse or validate is an error.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    match find_config(dir) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            debug!(dir = %dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TagCommitPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("changelist.toml");
        std::fs::write(&config_path, "[changelist]\nfile = \"CHANGES.md\"").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_yaml_over_toml() {
        let temp = TempDir::new().unwrap();
        let toml_path = temp.path().join("changelist.toml");
        let yaml_path = temp.path().join("changelist.yaml");
        std::fs::write(&toml_path, "[changelist]\nfile = \"a.md\"").unwrap();
        std::fs::write(&yaml_path, "changelist:\n  file: b.md").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, yaml_path);
    }

    #[test]
    fn test_find_config_in_github_dir() {
        let temp = TempDir::new().unwrap();
        let github_dir = temp.path().join(".github");
        std::fs::create_dir_all(&github_dir).unwrap();
        let config_path = github_dir.join("changelist.toml");
        std::fs::write(&config_path, "[changelist]\nfile = \"a.md\"").unwrap();

        assert_eq!(find_config(temp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".changelist.toml");
        std::fs::write(&config_path, "").unwrap();
        let nested = temp.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config(&nested), Some(config_path));
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("changelist.toml");
        std::fs::write(
            &config_path,
            "[changelist]\nfile = \"CHANGES.md\"\ntag_commits = \"inclusive\"\n\n[git]\ntag_pattern = \"^v\"\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.changelist.file, PathBuf::from("CHANGES.md"));
        assert_eq!(config.changelist.tag_commits, TagCommitPolicy::Inclusive);
        assert_eq!(config.git.tag_pattern.as_deref(), Some("^v"));
    }

    #[test]
    fn test_load_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("changelist.yaml");
        std::fs::write(&config_path, "changelist:\n  unreleased_label: Unreleased\n").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.changelist.unreleased_label, "Unreleased");
        assert_eq!(config.changelist.file, PathBuf::from("docs/changelist.md"));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_config_or_default(temp.path()).unwrap();
        assert!(path.is_none());
        assert_eq!(config.changelist.unreleased_label, "Current");
    }

    #[test]
    fn test_load_or_default_rejects_broken_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("changelist.toml"), "[changelist\n").unwrap();
        assert!(load_config_or_default(temp.path()).is_err());
    }
}
