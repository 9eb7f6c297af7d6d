//! End-to-end build of the fixture site through the public API.

use scholar_site::config::load_config;
use scholar_site::content::{load_content, parse_content, stock_content_toml};
use scholar_site::generate::{GenerateError, generate};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn build_fixtures(out: &Path) {
    let config = load_config(&fixtures()).unwrap();
    let site = load_content(&fixtures()).unwrap();
    generate(&site, &config, out).unwrap();
}

#[test]
fn fixture_site_builds_expected_tree() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    build_fixtures(&out);

    let home = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(home.starts_with("<!DOCTYPE html>"));
    assert!(home.contains("<h1>Bailey Researcher</h1>"));
    assert!(home.contains(r#"href="assets/bootstrap.min.css""#));
    // Title suffix and footer come from fixtures/content/config.toml
    assert!(home.contains("<title>Bailey Researcher - Research</title>"));
    assert!(home.contains(r#"href="https://github.com/example/website""#));
    // Self is bold (with marker) even though Bailey has a website
    assert!(home.contains("<b>Bailey Researcher*</b>"));
    assert!(home.contains(r#"<a href="https://casey.example">Casey Coauthor*</a> and Drew Advisor"#));

    let project = fs::read_to_string(out.join("project/pub1/index.html")).unwrap();
    assert!(project.contains(r#"href="../../assets/style.css""#));
    assert!(project.contains("<title>Volumetric Light Transport - Research</title>"));
    assert!(project.contains("https://www.youtube.com/embed/tjYVcOJONdI"));
    assert!(project.contains("@article{Researcher:2024,"));

    let bare = fs::read_to_string(out.join("project/pub2/index.html")).unwrap();
    assert!(bare.contains("Glass Rendering"));
    assert!(!bare.contains("Abstract"));
    assert!(!bare.contains("Cite"));
}

#[test]
fn rebuild_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let first = tmp.path().join("first");
    let second = tmp.path().join("second");
    build_fixtures(&first);
    build_fixtures(&second);

    for page in ["index.html", "project/pub1/index.html", "project/pub2/index.html"] {
        assert_eq!(
            fs::read(first.join(page)).unwrap(),
            fs::read(second.join(page)).unwrap(),
            "{page} differs between builds"
        );
    }
}

#[test]
fn project_without_publication_aborts() {
    let text = format!(
        "{}\n[[projects]]\nid = \"pub9\"\nimage = \"x.png\"\n",
        stock_content_toml()
    );
    let site = parse_content(&text).unwrap();
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");

    let result = generate(&site, &Default::default(), &out);

    assert!(matches!(result, Err(GenerateError::MissingPublication(ref id)) if id == "pub9"));
    assert!(!out.join("project/pub9/index.html").exists());
}

#[test]
fn stock_content_builds() {
    let site = parse_content(stock_content_toml()).unwrap();
    let tmp = TempDir::new().unwrap();
    generate(&site, &Default::default(), tmp.path()).unwrap();
    assert!(tmp.path().join("index.html").is_file());
    assert!(tmp.path().join("project/pub1/index.html").is_file());
}
