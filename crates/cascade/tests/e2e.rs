// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests that drive the `cascade` binary.
//!
//! Every test runs in its own temp dir with an explicit `--config`, so no
//! local `cascade.toml` leaks in.

use std::path::Path;
use std::process::{Command, Output};

use cascade_test_utils::write_fontello_config;
use serde_json::{json, Value};
use tempfile::TempDir;

fn cascade(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cascade"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should run")
}

fn workspace(config: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("site.toml"), config).unwrap();
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn resolve_font_icon_against_configured_catalogue() {
    let (_fonts, config_path) = write_fontello_config().unwrap();
    let dir = workspace(&format!(
        r#"
[logging]
level = "warn"

[[catalogue.fonts]]
id = 3
identifier = "Fontello"
config_path = "{}"
stylesheet_url = "/static/icon-fonts/3/css/fontello.css"
"#,
        config_path.display()
    ));
    std::fs::write(
        dir.path().join("icon.json"),
        json!({"icon_font": 3, "content": "star", "color": "#FF0000"}).to_string(),
    )
    .unwrap();

    let output = cascade(
        dir.path(),
        &[
            "--config",
            "site.toml",
            "resolve",
            "--plugin",
            "FontIconPlugin",
            "--glossary",
            "icon.json",
            "--position",
            "2",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let resolved: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(resolved["plugin_type"], "FontIconPlugin");
    assert_eq!(resolved["icon_class"], "icon-star");
    assert_eq!(resolved["stylesheet_url"], "/static/icon-fonts/3/css/fontello.css");
    assert_eq!(resolved["styles"]["color"], "#ff0000");
    assert_eq!(
        resolved["identifier"],
        r#"#2 Fontello: <i class="icon-star"></i>"#
    );
}

#[test]
fn validate_reports_each_bad_field() {
    let dir = workspace("");
    std::fs::write(
        dir.path().join("heading.json"),
        json!({"tag_type": "h9", "colour": "red"}).to_string(),
    )
    .unwrap();

    let output = cascade(
        dir.path(),
        &[
            "--config",
            "site.toml",
            "validate",
            "--plugin",
            "HeadingPlugin",
            "--glossary",
            "heading.json",
        ],
    );
    assert!(!output.status.success());
    let report = stderr(&output);
    assert!(report.contains("tag_type:"), "stderr: {report}");
    assert!(report.contains("colour:"), "stderr: {report}");
}

#[test]
fn plugins_lists_configured_snippet() {
    let dir = workspace(
        r#"
[templates.extra_render_templates]
CustomSnippetPlugin = [{ path = "myproject/hero.html", label = "Hero banner" }]
"#,
    );

    let output = cascade(dir.path(), &["--config", "site.toml", "plugins"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let listing = stdout(&output);
    assert!(listing.contains("CustomSnippetPlugin (Custom Snippet)"));
    assert!(listing.contains("layers: snippet > base"));
    assert!(listing.contains("TextIconPlugin (Icon)"));
}

#[test]
fn config_typo_is_rendered_and_fails() {
    let dir = workspace("[server]\nprot = 9000\n");

    let output = cascade(dir.path(), &["--config", "site.toml", "plugins"]);
    assert!(!output.status.success());
    let report = stderr(&output);
    assert!(report.contains("prot"), "stderr: {report}");
    assert!(report.contains("port"), "stderr: {report}");
}

#[test]
fn unknown_plugin_type_fails() {
    let dir = workspace("");
    let output = cascade(
        dir.path(),
        &["--config", "site.toml", "resolve", "--plugin", "CarouselPlugin"],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("CarouselPlugin"));
}
