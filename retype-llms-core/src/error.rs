//! Error type shared by the locator and the loader.
//!
//! Every variant carries the path it is about: the caller's only useful
//! reaction to any of these is to go and look at that file.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::Issue;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file was located but could not be read.
    #[error("Failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Nothing usable exists at or under the given path.
    #[error("{}", not_found_message(path, candidates))]
    NotFound {
        path: PathBuf,
        /// File names probed inside `path`; empty when `path` itself is missing.
        candidates: Vec<&'static str>,
    },

    /// The path is a file, but not one with a config extension.
    #[error("Invalid file type: {}", path.display())]
    InvalidType { path: PathBuf },

    /// The file is not well-formed YAML/JSON.
    #[error("Failed to parse config at {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The document parsed but one or more fields have the wrong shape.
    #[error(
        "Retype config at {} was not in an expected format:\n  {}",
        path.display(),
        join_issues(issues)
    )]
    Validation { path: PathBuf, issues: Vec<Issue> },
}

impl ConfigError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigError::Io { path, .. }
            | ConfigError::NotFound { path, .. }
            | ConfigError::InvalidType { path }
            | ConfigError::Parse { path, .. }
            | ConfigError::Validation { path, .. } => path,
        }
    }
}

fn not_found_message(path: &std::path::Path, candidates: &[&'static str]) -> String {
    if candidates.is_empty() {
        format!("No retype config found at {}", path.display())
    } else {
        format!(
            "No retype config found in directory: {}. Expected one of {}",
            path.display(),
            candidates.join(", ")
        )
    }
}

fn join_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n  ")
}
