//! CLI glue for retype-llms: step inputs, orchestration and host outputs.
//!
//! Inputs come from flags or, when run as a GitHub Action, from the
//! `INPUT_*` environment variables the runner sets. All domain logic lives
//! in [`retype_llms_core`]; [`run`] only wires the steps together and talks
//! to the [`Host`].

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use retype_llms_core::llms::{LlmsFileBuilder, LLMS_FILE, LLMS_FULL_FILE};
use retype_llms_core::pages::discover_pages;
use retype_llms_core::{find_config, load_config, DerivedSettings, Overrides};
use serde::Serialize;

use crate::host::{Host, OUTPUT_PATH_KEY};

/// Validate a Retype config and write llms.txt / llms-full.txt.
#[derive(Debug, Clone, Parser, Serialize)]
#[clap(
    name = "retype-llms",
    version,
    about = "Validate a Retype config and emit llms.txt summaries for the generated docs"
)]
pub struct Cli {
    /// Folder for the build output; overrides `output` from the config
    #[clap(long, env = "INPUT_OUTPUT")]
    pub output: Option<String>,

    /// Raw JSON overriding config values (accepted but not applied)
    #[clap(long = "override", env = "INPUT_OVERRIDE")]
    #[serde(rename = "override")]
    pub override_json: Option<String>,

    /// Log every step of the run
    #[clap(
        long,
        env = "INPUT_VERBOSE",
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub verbose: bool,

    /// Path to retype.yml, a JSON/YAML config file, or a directory holding one
    #[clap(long, env = "INPUT_CONFIG_PATH", default_value = "")]
    pub config_path: String,

    /// Short project description used in the llms files
    #[clap(long, env = "INPUT_DESCRIPTION")]
    pub description: Option<String>,
}

/// Runs one locate -> load -> derive -> write pass.
///
/// Returns the effective output directory. On success the
/// `retype-output-path` output has been set exactly once.
pub async fn run(cli: Cli, host: &dyn Host) -> Result<String> {
    tracing::info!("trace_initialised");
    tracing::debug!(
        inputs = %serde_json::to_string(&cli).unwrap_or_default(),
        "Inputs"
    );

    let config_path = find_config(&cli.config_path)?;
    let config = load_config(&config_path)?;
    tracing::debug!(
        config_path = %config_path.display(),
        config = %serde_json::to_string(&config).unwrap_or_default(),
        "Config detected"
    );

    if let Some(raw) = cli.override_json.as_deref().filter(|s| !s.trim().is_empty()) {
        tracing::debug!(raw, "Override input received");
        host.warning("The `override` input is not applied; set the values in the retype config instead.");
    }

    let overrides = Overrides::new(cli.output.clone(), cli.description.clone());
    let settings = DerivedSettings::derive(&overrides, &config, &config_path);
    for advisory in settings.advisories() {
        host.warning(&advisory.to_string());
    }
    tracing::info!(
        output = %settings.output,
        content_root = %settings.input.display(),
        "Resolved output path"
    );

    let mut builder = LlmsFileBuilder::new(settings.summary_title(), settings.url.as_deref())
        .with_description(settings.description.clone());
    let pages = discover_pages(&settings.input, settings.generator.as_ref()).with_context(|| {
        format!(
            "Failed to list content root {}",
            settings.input.display()
        )
    })?;
    for page in &pages {
        let body = page
            .read_body()
            .with_context(|| format!("Failed to read page {:?}", page.source))?;
        builder.add_page(page, body);
    }

    write_llms_files(Path::new(&settings.output), &builder).await?;

    host.set_output(OUTPUT_PATH_KEY, &settings.output)
        .context("Failed to set step output")?;
    tracing::info!(pages = pages.len(), "Retype build LLMs files completed successfully");
    Ok(settings.output)
}

async fn write_llms_files(output_dir: &Path, builder: &LlmsFileBuilder) -> Result<()> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    for (name, contents) in [(LLMS_FILE, builder.build()), (LLMS_FULL_FILE, builder.build_full())] {
        let path = output_dir.join(name);
        tokio::fs::write(&path, contents)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "Wrote llms file");
    }
    Ok(())
}
