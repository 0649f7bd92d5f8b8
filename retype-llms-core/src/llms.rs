//! Text assembly for `llms.txt` and `llms-full.txt`.

use crate::pages::Page;

pub const LLMS_FILE: &str = "llms.txt";
pub const LLMS_FULL_FILE: &str = "llms-full.txt";

#[derive(Debug, Clone)]
struct Entry {
    title: String,
    link: String,
    body: String,
}

/// Builds the two summary documents from a title, an optional site URL and
/// the discovered pages. Without a URL all links are relative (`./...`).
#[derive(Debug, Clone)]
pub struct LlmsFileBuilder {
    title: String,
    description: Option<String>,
    base: String,
    entries: Vec<Entry>,
}

impl LlmsFileBuilder {
    pub fn new(title: impl Into<String>, url: Option<&str>) -> Self {
        let base = url
            .map(|u| u.trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| ".".to_string());
        Self {
            title: title.into(),
            description: None,
            base,
            entries: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn add_page(&mut self, page: &Page, body: String) {
        self.entries.push(Entry {
            title: page.title.clone(),
            link: self.link_to(&page.route),
            body,
        });
    }

    fn llms_full_file_url(&self) -> String {
        self.link_to(LLMS_FULL_FILE)
    }

    /// Contents of `llms.txt`: header, description, pointer to the full file
    /// and an index of pages.
    pub fn build(&self) -> String {
        let mut out = format!("{}\n{}", self.title, self.description_block());
        out.push_str(&format!(
            "\n\nFor complete documentation in a single file, see [Full Documentation]({}).\n\n",
            self.llms_full_file_url()
        ));
        out.push('\n');
        if !self.entries.is_empty() {
            out.push_str("## Pages\n\n");
            for entry in &self.entries {
                out.push_str(&format!("- [{}]({})\n", entry.title, entry.link));
            }
        }
        out
    }

    /// Contents of `llms-full.txt`: header, description and every page inlined.
    pub fn build_full(&self) -> String {
        let mut out = format!("{}\n{}\n", self.title, self.description_block());
        for entry in &self.entries {
            out.push_str(&format!("## {}\n\nSource: {}\n\n", entry.title, entry.link));
            let body = entry.body.trim();
            if !body.is_empty() {
                out.push_str(body);
                out.push_str("\n\n");
            }
        }
        out
    }

    fn description_block(&self) -> String {
        match &self.description {
            Some(d) => format!("\n> {}\n", d.trim()),
            None => String::new(),
        }
    }

    fn link_to(&self, route: &str) -> String {
        format!("{}/{}", self.base, route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_description_and_full_link() {
        let builder = LlmsFileBuilder::new("# Demo - Documentation for LLMs", Some("https://x.example/"))
            .with_description(Some("A demo site".into()));
        assert_eq!(
            builder.build(),
            "# Demo - Documentation for LLMs\n\n> A demo site\n\n\nFor complete documentation in a single file, see [Full Documentation](https://x.example/llms-full.txt).\n\n\n"
        );
        assert_eq!(
            builder.build_full(),
            "# Demo - Documentation for LLMs\n\n> A demo site\n\n"
        );
    }

    #[test]
    fn missing_url_uses_relative_links() {
        let mut builder = LlmsFileBuilder::new("# T", None);
        let page = Page {
            source: None,
            route: "guide/".into(),
            title: "Guide".into(),
        };
        builder.add_page(&page, "Read me.\n".into());

        assert!(builder.build().contains("[Full Documentation](./llms-full.txt)"));
        assert!(builder.build().ends_with("## Pages\n\n- [Guide](./guide/)\n"));
        assert!(builder
            .build_full()
            .ends_with("## Guide\n\nSource: ./guide/\n\nRead me.\n\n"));
    }
}
