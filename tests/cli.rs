use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const INPUTS: [&str; 5] = [
    "INPUT_OUTPUT",
    "INPUT_OVERRIDE",
    "INPUT_VERBOSE",
    "INPUT_CONFIG_PATH",
    "INPUT_DESCRIPTION",
];

/// Creates a site directory holding `retype.yml` with the given contents.
fn create_site(config_yaml: &str) -> TempDir {
    let site = tempdir().expect("Creating temp site failed");
    fs::write(site.path().join("retype.yml"), config_yaml).expect("Writing config failed");
    fs::write(site.path().join("index.md"), "# Home\n\nWelcome.\n").expect("Writing page failed");
    site
}

/// The binary with a clean set of action inputs, run from `cwd`.
fn action_cmd(cwd: &Path, github_output: &Path) -> Command {
    let mut cmd = Command::cargo_bin("retype-llms").expect("Binary exists");
    for input in INPUTS {
        cmd.env_remove(input);
    }
    cmd.current_dir(cwd).env("GITHUB_OUTPUT", github_output);
    cmd
}

#[test]
fn writes_llms_files_to_default_output_and_sets_step_output() {
    let site = create_site("url: https://x.example/\nbranding:\n  title: Demo\n");
    let github_output = site.path().join("github_output");

    action_cmd(site.path(), &github_output)
        .env("INPUT_VERBOSE", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("::warning::").not());

    let outputs = fs::read_to_string(&github_output).unwrap();
    assert_eq!(outputs, "retype-output-path=.retype\n");

    let index = fs::read_to_string(site.path().join(".retype/llms.txt")).unwrap();
    assert!(index.starts_with("# Demo - Documentation for LLMs\n"), "{index}");
    assert!(index.contains("- [Home](https://x.example/)"), "{index}");
    assert!(site.path().join(".retype/llms-full.txt").is_file());
}

#[test]
fn output_input_beats_config_output() {
    let site = create_site("url: https://x.example\noutput: built\n");
    let github_output = site.path().join("github_output");

    action_cmd(site.path(), &github_output)
        .env("INPUT_OUTPUT", "dist")
        .env("INPUT_DESCRIPTION", "Demo project")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&github_output).unwrap(),
        "retype-output-path=dist\n"
    );
    let index = fs::read_to_string(site.path().join("dist/llms.txt")).unwrap();
    assert!(index.contains("> Demo project"));
    assert!(!site.path().join("built").exists());
}

#[test]
fn config_path_flag_accepts_an_explicit_json_file() {
    let site = tempdir().unwrap();
    let config = site.path().join("docs.json");
    fs::write(&config, r#"{"url": "https://x.example", "output": "site-out"}"#).unwrap();
    let github_output = site.path().join("github_output");

    action_cmd(site.path(), &github_output)
        .arg("--config-path")
        .arg(&config)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&github_output).unwrap(),
        "retype-output-path=site-out\n"
    );
}

#[test]
fn missing_url_is_a_warning_not_a_failure() {
    let site = create_site("input: .\n");
    let github_output = site.path().join("github_output");

    action_cmd(site.path(), &github_output)
        .assert()
        .success()
        .stdout(predicate::str::contains("::warning::The retype config does not have an url"));

    assert!(site.path().join(".retype/llms.txt").is_file());
}

#[test]
fn invalid_config_fails_the_step_with_every_issue() {
    let site = create_site("generator:\n  paths: bogus\ntoc:\n  depth: {}\n");
    let github_output = site.path().join("github_output");

    action_cmd(site.path(), &github_output)
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("::error::Retype config at")
                .and(predicate::str::contains("%0A  generator.paths: "))
                .and(predicate::str::contains("%0A  toc.depth: ")),
        );

    assert!(!github_output.exists());
    assert!(!site.path().join(".retype").exists());
}

#[test]
fn directory_without_config_fails_naming_candidates() {
    let empty = tempdir().unwrap();
    let github_output = empty.path().join("github_output");

    action_cmd(empty.path(), &github_output)
        .env("INPUT_CONFIG_PATH", empty.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Expected one of retype.yml, retype.yaml, retype.json",
        ));

    assert!(!github_output.exists());
}

#[test]
fn unsupported_config_extension_fails() {
    let site = tempdir().unwrap();
    let config = site.path().join("retype.toml");
    fs::write(&config, "url = 'x'").unwrap();
    let github_output = site.path().join("github_output");

    action_cmd(site.path(), &github_output)
        .arg("--config-path")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("::error::Invalid file type"));
}

#[test]
fn verbose_input_accepts_yes() {
    let site = create_site("url: https://x.example\n");
    let github_output = site.path().join("github_output");

    action_cmd(site.path(), &github_output)
        .env("INPUT_VERBOSE", "yes")
        .assert()
        .success();

    let outputs = fs::read_to_string(&github_output).unwrap();
    assert_eq!(outputs, "retype-output-path=.retype\n");
}
