//! Config Parser & Validator: reads a located config file, decodes it and
//! checks it against [`crate::schema::RETYPE_SCHEMA`].
//!
//! No defaults are applied here. A field that is absent in the file is
//! absent in the returned [`RetypeConfig`].

use std::fs;
use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, error, info};

use crate::config::RetypeConfig;
use crate::error::ConfigError;
use crate::validate::{validate_document, Issue};

/// Reads, decodes and validates the config file at `path`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RetypeConfig, ConfigError> {
    let path = path.as_ref();
    info!(config_path = %path.display(), "Loading configuration from file");

    let text = match fs::read_to_string(path) {
        Ok(text) => {
            debug!(config_path = %path.display(), bytes = text.len(), "Config file read successfully");
            text
        }
        Err(e) => {
            error!(error = ?e, config_path = %path.display(), "Failed to read config file");
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let config = parse_config_str(&text, path)?;
    config.trace_loaded();
    Ok(config)
}

/// Decodes and validates an in-memory document. `path` only labels errors.
///
/// YAML and JSON files go through the same YAML decoder.
pub fn parse_config_str(text: &str, path: &Path) -> Result<RetypeConfig, ConfigError> {
    let mut tree = decode(text).map_err(|message| {
        error!(config_path = %path.display(), %message, "Failed to parse config");
        ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        }
    })?;

    let issues = validate_document(&tree);
    if !issues.is_empty() {
        error!(
            config_path = %path.display(),
            issues = issues.len(),
            "Config does not match the expected format"
        );
        return Err(ConfigError::Validation {
            path: path.to_path_buf(),
            issues,
        });
    }

    if tree.is_null() {
        debug!(config_path = %path.display(), "Config document is empty");
        return Ok(RetypeConfig::default());
    }

    drop_non_string_keys(&mut tree);

    // The tree already matches the schema, so a failure here means the
    // typed model and the schema disagree.
    serde_yaml::from_value(tree).map_err(|e| ConfigError::Validation {
        path: path.to_path_buf(),
        issues: vec![Issue {
            path: Vec::new(),
            message: e.to_string(),
        }],
    })
}

fn decode(text: &str) -> Result<Value, String> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(text).map_err(|e| e.to_string())
}

/// Keys such as `true:` or `3:` are never part of the schema. They are
/// ignored like any other unknown key, at every depth.
fn drop_non_string_keys(value: &mut Value) {
    match value {
        Value::Mapping(map) => {
            map.retain(|key, _| {
                let keep = key.is_string();
                if !keep {
                    debug!(?key, "Ignoring non-string config key");
                }
                keep
            });
            for (_, child) in map.iter_mut() {
                drop_non_string_keys(child);
            }
        }
        Value::Sequence(items) => items.iter_mut().for_each(drop_non_string_keys),
        Value::Tagged(tagged) => drop_non_string_keys(&mut tagged.value),
        _ => {}
    }
}
