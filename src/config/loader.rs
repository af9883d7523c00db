use std::path::{Path, PathBuf};
use std::fs;
use log::debug;
use serde_json::Value;

use crate::config::types::NavConfig;
use crate::config::validation;
use crate::utils::error::{PagemarkError, Result};
use crate::utils::path::get_extension;

/// Configuration file names to look for
pub const CONFIG_FILES: [&str; 4] = [
    "_pagemark.yml",
    "_pagemark.yaml",
    "_pagemark.toml",
    "_pagemark.json",
];

/// Load navigation configuration from config files
///
/// Explicit files must exist. Without them, every default file name present
/// in `source_dir` is read. Later files are merged over earlier ones key by
/// key, so a file may override a single threshold.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> Result<NavConfig> {
    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&source_dir),
    };

    let mut merged = Value::Object(Default::default());

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            let file_value = read_config_file(&path)?;
            merge_values(&mut merged, file_value);
        }
    }

    let config: NavConfig = serde_json::from_value(merged)
        .map_err(|e| PagemarkError::Config(format!("Invalid configuration: {}", e)))?;

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Read one configuration file into a generic value tree
fn read_config_file(config_path: &Path) -> Result<Value> {
    if !config_path.exists() {
        return Err(PagemarkError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| PagemarkError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    // Parse based on file extension, YAML when there is none
    let value = match get_extension(config_path).as_deref() {
        Some("yml") | Some("yaml") | None => parse_yaml_config(&content, config_path)?,
        Some("toml") => parse_toml_config(&content, config_path)?,
        Some("json") => parse_json_config(&content, config_path)?,
        Some(other) => {
            return Err(PagemarkError::Config(format!(
                "Unsupported configuration file format: {}", other
            )));
        }
    };

    // An empty YAML document parses as null
    if value.is_null() {
        return Ok(Value::Object(Default::default()));
    }

    Ok(value)
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> Result<Value> {
    serde_yaml::from_str(content).map_err(|source| PagemarkError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> Result<Value> {
    toml::from_str(content).map_err(|source| PagemarkError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(content)
        .map_err(|e| PagemarkError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )))
}

/// Merge `source` into `target`, recursing into objects
fn merge_values(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, value) in source_map {
                match target_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        target_map.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}
