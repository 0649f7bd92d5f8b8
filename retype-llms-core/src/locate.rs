//! Config Locator: turns a user-supplied path into the one config file to read.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// File names probed inside a directory, in priority order.
pub const CONFIG_FILENAMES: [&str; 3] = ["retype.yml", "retype.yaml", "retype.json"];

/// Extensions (lowercase, without the dot) accepted for an explicit file path.
pub const CONFIG_EXTENSIONS: [&str; 3] = ["yml", "yaml", "json"];

/// Resolves `path` to a concrete config file.
///
/// A file is accepted as-is when its extension is `.yml`, `.yaml` or `.json`
/// (case-insensitive). A directory is probed for [`CONFIG_FILENAMES`] in
/// order and the first hit wins, so `retype.yml` always beats the others.
/// An empty path means the current directory.
pub fn find_config<P: AsRef<Path>>(path: P) -> Result<PathBuf, ConfigError> {
    let path = path.as_ref();
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    debug!(config_path = %path.display(), "Resolving retype config location");

    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            warn!(error = %e, config_path = %path.display(), "Config path does not exist");
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
                candidates: Vec::new(),
            });
        }
    };

    if metadata.is_file() {
        if has_config_extension(path) {
            info!(config_path = %path.display(), "Using config file");
            return Ok(path.to_path_buf());
        }
        warn!(config_path = %path.display(), "Config file has an unsupported extension");
        return Err(ConfigError::InvalidType {
            path: path.to_path_buf(),
        });
    }

    if metadata.is_dir() {
        for name in CONFIG_FILENAMES {
            let candidate = path.join(name);
            if candidate.is_file() {
                info!(config_path = %candidate.display(), "Found config file in directory");
                return Ok(candidate);
            }
            debug!(candidate = %candidate.display(), "Candidate not present");
        }
        warn!(directory = %path.display(), "No config file found in directory");
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
            candidates: CONFIG_FILENAMES.to_vec(),
        });
    }

    Err(ConfigError::NotFound {
        path: path.to_path_buf(),
        candidates: Vec::new(),
    })
}

fn has_config_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            CONFIG_EXTENSIONS.iter().any(|known| *known == ext)
        })
        .unwrap_or(false)
}
