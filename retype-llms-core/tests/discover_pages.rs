use retype_llms_core::config::{DirectoryIndex, Generator};
use retype_llms_core::llms::LlmsFileBuilder;
use retype_llms_core::pages::discover_pages;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_discover_pages_lists_markdown_and_indexed_directories() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("README.md"), "# Welcome\n\nHello.").unwrap();
    fs::write(root.join("About.md"), "Some text without heading").unwrap();
    fs::write(root.join("retype.yml"), "url: x").unwrap();
    fs::write(root.join("logo.png"), [0u8; 4]).unwrap();
    fs::create_dir(root.join("guide")).unwrap();
    fs::write(root.join("guide").join("index.md"), "# The Guide\n").unwrap();
    fs::create_dir(root.join("api")).unwrap();
    fs::write(root.join("api").join("index.yml"), "label: API").unwrap();
    fs::create_dir(root.join("assets")).unwrap();
    fs::create_dir(root.join(".retype")).unwrap();
    fs::write(root.join(".retype").join("hidden.md"), "# Hidden").unwrap();

    let pages = discover_pages(root, None).expect("discovery succeeds");
    let summary: Vec<(&str, &str)> = pages
        .iter()
        .map(|p| (p.route.as_str(), p.title.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("about/", "About"),
            ("", "Welcome"),
            ("api/", "api"),
            ("guide/", "The Guide"),
        ]
    );
    assert!(pages[2].source.is_none());
    assert_eq!(pages[2].read_body().unwrap(), "");
}

#[test]
fn test_alt_index_names_map_to_site_root() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("home.md"), "# Home").unwrap();

    let generator = Generator {
        directory_index: Some(DirectoryIndex {
            alt_names: Some(vec!["Home".into()]),
            ..Default::default()
        }),
        ..Default::default()
    };
    let pages = discover_pages(tmp.path(), Some(&generator)).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].route, "");
}

#[test]
fn test_missing_content_root_is_an_error() {
    let tmp = tempdir().unwrap();
    assert!(discover_pages(&tmp.path().join("nope"), None).is_err());
}

#[test]
fn test_pages_feed_both_llms_files() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("intro.md"), "# Intro\n\nStart here.\n").unwrap();

    let pages = discover_pages(tmp.path(), None).unwrap();
    let mut builder = LlmsFileBuilder::new("# Demo - Documentation for LLMs", Some("https://x.example"));
    for page in &pages {
        builder.add_page(page, page.read_body().unwrap());
    }

    let index = builder.build();
    assert!(index.contains("- [Intro](https://x.example/intro/)"), "{index}");
    assert!(!index.contains("Start here."));

    let full = builder.build_full();
    assert!(full.contains("## Intro\n\nSource: https://x.example/intro/\n\n# Intro\n\nStart here.\n\n"), "{full}");
}
