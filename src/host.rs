//! The CI host seam: step outputs, annotations and failure reporting.
//!
//! Plain log lines go through `tracing`; this trait only covers the
//! workflow-command side of the runner protocol.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

/// Name of the step output carrying the effective output directory.
pub const OUTPUT_PATH_KEY: &str = "retype-output-path";

#[cfg_attr(test, automock)]
pub trait Host {
    /// Publish a named step output.
    fn set_output(&self, name: &str, value: &str) -> std::io::Result<()>;

    /// Emit a non-fatal warning annotation.
    fn warning(&self, message: &str);

    /// Mark the step as failed with a user-visible reason.
    fn set_failed(&self, message: &str);
}

/// GitHub Actions runner protocol.
///
/// Outputs are appended to the file named by `GITHUB_OUTPUT`; without it
/// (local runs) they are printed as `name=value`.
#[derive(Debug, Clone, Default)]
pub struct GithubActionsHost {
    output_file: Option<PathBuf>,
}

impl GithubActionsHost {
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }

    pub fn from_env() -> Self {
        Self::new(
            std::env::var_os("GITHUB_OUTPUT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        )
    }
}

impl Host for GithubActionsHost {
    fn set_output(&self, name: &str, value: &str) -> std::io::Result<()> {
        tracing::debug!(name, value, "Setting step output");
        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{name}={value}")
            }
            None => {
                println!("{name}={value}");
                Ok(())
            }
        }
    }

    fn warning(&self, message: &str) {
        println!("::warning::{}", escape_data(message));
    }

    fn set_failed(&self, message: &str) {
        println!("::error::{}", escape_data(message));
    }
}

/// Escapes a workflow-command message so multi-line text survives.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
