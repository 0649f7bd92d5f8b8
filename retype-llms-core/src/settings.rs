//! Effective settings computed once per run.
//!
//! Precedence is caller override > config file value > built-in default.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{Generator, RetypeConfig};

pub const DEFAULT_OUTPUT: &str = ".retype";
pub const DEFAULT_INPUT: &str = ".";
pub const DEFAULT_TITLE: &str = "Documentation";

/// Values supplied by the caller (CI step inputs). Empty strings count as unset.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output: Option<String>,
    pub description: Option<String>,
}

impl Overrides {
    pub fn new(output: Option<String>, description: Option<String>) -> Self {
        Self {
            output: non_empty(output),
            description: non_empty(description),
        }
    }
}

/// A non-fatal observation about the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    MissingUrl,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::MissingUrl => write!(
                f,
                "The retype config does not have an url. We can't properly link to other files with absolute links."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSettings {
    /// Output directory, as given (relative paths stay relative to the working directory).
    pub output: String,
    /// Content root, resolved against the config file's directory rather than
    /// the working directory, the way Retype itself reads `input`. This only
    /// differs when the config lives in a subdirectory.
    pub input: PathBuf,
    pub title: String,
    pub description: Option<String>,
    /// Site URL without a trailing slash.
    pub url: Option<String>,
    pub generator: Option<Generator>,
}

impl DerivedSettings {
    pub fn derive(overrides: &Overrides, config: &RetypeConfig, config_path: &Path) -> Self {
        let output = overrides
            .output
            .clone()
            .or_else(|| non_empty(config.output.clone()))
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

        let config_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
        let input = config_dir.join(
            non_empty(config.input.clone()).unwrap_or_else(|| DEFAULT_INPUT.to_string()),
        );

        let title = config
            .branding_title()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_string();

        let url = non_empty(config.url.clone()).map(|u| u.trim_end_matches('/').to_string());

        let settings = Self {
            output,
            input,
            title,
            description: overrides.description.clone(),
            url,
            generator: config.generator.clone(),
        };
        debug!(?settings, "Derived effective settings");
        settings
    }

    /// Non-fatal warnings the caller should surface.
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        if self.url.is_none() {
            warn!("Config has no url; llms files will use relative links");
            advisories.push(Advisory::MissingUrl);
        }
        advisories
    }

    /// Header line used in both llms files.
    pub fn summary_title(&self) -> String {
        format!("# {} - Documentation for LLMs", self.title)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Branding;

    #[test]
    fn blank_overrides_are_ignored() {
        let overrides = Overrides::new(Some("  ".into()), Some(String::new()));
        assert!(overrides.output.is_none());
        assert!(overrides.description.is_none());
    }

    #[test]
    fn input_is_resolved_next_to_the_config_file() {
        let config = RetypeConfig {
            input: Some("docs".into()),
            ..Default::default()
        };
        let settings =
            DerivedSettings::derive(&Overrides::default(), &config, Path::new("site/retype.yml"));
        assert_eq!(settings.input, PathBuf::from("site/docs"));
    }

    #[test]
    fn title_falls_back_when_branding_is_blank() {
        let config = RetypeConfig {
            branding: Some(Branding {
                title: Some(" ".into()),
            }),
            ..Default::default()
        };
        let settings =
            DerivedSettings::derive(&Overrides::default(), &config, Path::new("retype.yml"));
        assert_eq!(settings.title, DEFAULT_TITLE);
        assert_eq!(
            settings.summary_title(),
            "# Documentation - Documentation for LLMs"
        );
    }
}
