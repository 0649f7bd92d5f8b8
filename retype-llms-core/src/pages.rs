//! Top-level content discovery for the llms files.
//!
//! Only the first level of the content root is listed. Markdown files become
//! pages, directories become pages when they carry an `index.md`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{Generator, Recase};

/// File stems that always map to the folder they live in.
const INDEX_NAMES: [&str; 3] = ["index", "readme", "default"];

/// A page found in the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Markdown file with the page body, if any.
    pub source: Option<PathBuf>,
    /// Route relative to the site root, e.g. `about/`; empty for the home page.
    pub route: String,
    pub title: String,
}

impl Page {
    pub fn read_body(&self) -> io::Result<String> {
        match &self.source {
            Some(path) => fs::read_to_string(path),
            None => Ok(String::new()),
        }
    }
}

/// Lists the pages at the top of `root`, sorted by file name.
pub fn discover_pages(root: &Path, generator: Option<&Generator>) -> io::Result<Vec<Page>> {
    info!(content_root = %root.display(), "Discovering content pages");

    let mut entries = fs::read_dir(root)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let alt_names: Vec<String> = generator
        .and_then(|g| g.directory_index.as_ref())
        .and_then(|d| d.alt_names.clone())
        .unwrap_or_default()
        .into_iter()
        .map(|n| n.to_ascii_lowercase())
        .collect();
    let is_index = |stem: &str| {
        let stem = stem.to_ascii_lowercase();
        INDEX_NAMES.iter().any(|n| *n == stem) || alt_names.contains(&stem)
    };

    let mut pages = Vec::new();
    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            debug!(entry = %name, "Skipping hidden entry");
            continue;
        }
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            let index_md = path.join("index.md");
            let index_yml = path.join("index.yml");
            if index_md.is_file() {
                let title = heading_or(&index_md, &name)?;
                pages.push(Page {
                    source: Some(index_md),
                    route: route_for(&name, generator),
                    title,
                });
            } else if index_yml.is_file() {
                pages.push(Page {
                    source: None,
                    route: route_for(&name, generator),
                    title: name.clone(),
                });
            } else {
                debug!(entry = %name, "Directory has no index file, skipping");
            }
            continue;
        }

        let is_markdown = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if !is_markdown {
            debug!(entry = %name, "Ignoring non-markdown file");
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let route = if is_index(&stem) {
            String::new()
        } else {
            route_for(&stem, generator)
        };
        let title = heading_or(&path, &stem)?;
        pages.push(Page {
            source: Some(path),
            route,
            title,
        });
    }

    info!(pages = pages.len(), "Content discovery complete");
    Ok(pages)
}

fn route_for(name: &str, generator: Option<&Generator>) -> String {
    let keep_case = matches!(generator.and_then(|g| g.recase), Some(Recase::None));
    let trailing_slash = generator.and_then(|g| g.trailing_slash).unwrap_or(true);

    let mut route = if keep_case {
        name.to_string()
    } else {
        name.to_lowercase()
    };
    if trailing_slash {
        route.push('/');
    }
    route
}

/// First `# ` heading of a markdown file, or `fallback`.
fn heading_or(path: &Path, fallback: &str) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    let heading = text
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty());
    Ok(heading.unwrap_or_else(|| fallback.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_follow_generator_settings() {
        assert_eq!(route_for("Getting-Started", None), "getting-started/");

        let generator = Generator {
            recase: Some(Recase::None),
            trailing_slash: Some(false),
            ..Default::default()
        };
        assert_eq!(route_for("Getting-Started", Some(&generator)), "Getting-Started");
    }
}
