use crate::{ConfigError, ErdConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
pub const CONFIG_FILES: &[&str] = &[
    ".graphql-erd.yml",
    ".graphql-erd.yaml",
    ".graphql-erd.json",
    ".graphql-erd.toml",
    "graphql-erd.config.toml",
];

/// Find a config file by walking up the directory tree from the given start directory.
/// Returns the path to the config file if found.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();
    let mut checked_dirs = 0;

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::info!(path = %config_path.display(), checked_dirs, "Found config file");
                return Some(config_path);
            }
        }

        checked_dirs += 1;
        if !current_dir.pop() {
            tracing::debug!(checked_dirs, "No config file found");
            return None;
        }
    }
}

/// Load a config from the specified path.
/// Automatically detects the format based on file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<ErdConfig> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = load_config_from_str(&contents, path)?;
    tracing::info!(labels = ?config.labels, "Config loaded successfully");
    Ok(config)
}

/// Load a config from a string.
/// The path is used for error messages and format detection.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<ErdConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    match extension {
        "yml" | "yaml" => {
            tracing::trace!("Parsing as YAML");
            parse_yaml(contents, path)
        }
        "json" => {
            tracing::trace!("Parsing as JSON");
            parse_json(contents, path)
        }
        "toml" => {
            tracing::trace!("Parsing as TOML");
            parse_toml(contents, path)
        }
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Resolves the configuration for a run: an explicit file if given, otherwise
/// the nearest discovered file, otherwise defaults; then the environment.
pub fn resolve_config(explicit: Option<&Path>, start_dir: &Path) -> Result<ErdConfig> {
    resolve_config_with(explicit, start_dir, |name| std::env::var(name).ok())
}

/// [`resolve_config`] with environment variables read through `lookup`.
pub fn resolve_config_with<F>(
    explicit: Option<&Path>,
    start_dir: &Path,
    lookup: F,
) -> Result<ErdConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let path = explicit.map(Path::to_path_buf).or_else(|| find_config(start_dir));
    let mut config = match path {
        Some(path) => load_config(&path)?,
        None => ErdConfig::default(),
    };
    config.apply_env_with(lookup)?;
    Ok(config)
}

/// Parse YAML configuration
fn parse_yaml(contents: &str, path: &Path) -> Result<ErdConfig> {
    if contents.trim().is_empty() {
        return Ok(ErdConfig::default());
    }
    serde_saphyr::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

/// Parse JSON configuration
fn parse_json(contents: &str, path: &Path) -> Result<ErdConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Parse TOML configuration
fn parse_toml(contents: &str, path: &Path) -> Result<ErdConfig> {
    toml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("TOML parse error: {e}"),
    })
}
