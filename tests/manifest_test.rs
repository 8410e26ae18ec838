//! Manifest-driven generation tests.
//!
//! These follow the same path as the command-line tool: manifest and
//! document come from disk, the stylesheet goes back to disk.

use std::fs;

use lamina::manifest::Manifest;
use lamina::{Error, HtmlIndex, Registry};
use tempfile::TempDir;

const PAGE: &str = r#"<html><body>
    <header id="hero"><h1 id="title">Title</h1></header>
    <main id="main"><ul><li>one</li><li>two</li></ul></main>
    <footer id="footer">fin</footer>
</body></html>"#;

const RULES: &str = r#"{
    "entries": [
        { "layer": "chrome", "rules": [
            { "ids": ["hero", "footer"], "style": { "display": "flex", "justifyContent": "flex-start" } }
        ] },
        { "ids": ["main"], "style": { "color": "green" } },
        { "bases": ["main"], "selectors": ["li"], "style": { "marginTop": "1rem" } }
    ]
}"#;

fn generate(manifest_json: &str, html: &str) -> Result<String, Error> {
    let manifest = Manifest::from_json(manifest_json).expect("Failed to parse manifest");
    let document = HtmlIndex::parse(html)?;
    let mut registry = Registry::new(document);
    registry.begin()?;
    manifest.apply(&mut registry)?;
    Ok(registry.build()?.text())
}

#[test]
fn test_manifest_to_stylesheet() {
    let text = generate(RULES, PAGE).expect("Failed to generate stylesheet");
    assert_eq!(
        text,
        "@layer chrome, main;\n\
         @layer chrome { #hero { display: flex; justify-content: flex-start; } }\n\
         @layer chrome { #footer { display: flex; justify-content: flex-start; } }\n\
         @layer main { #main { color: green; } }\n\
         @layer main { #main li { margin-top: 1rem; } }\n"
    );
}

#[test]
fn test_manifest_unknown_id() {
    let rules = r#"{ "entries": [{ "ids": ["ghost"], "style": { "color": "red" } }] }"#;
    let err = generate(rules, PAGE).unwrap_err();
    assert!(matches!(err, Error::UnknownId(name) if name == "ghost"));
}

#[test]
fn test_manifest_layer_discipline() {
    // Two manifest layers with the same name hit the reuse check
    let rules = r#"{ "entries": [
        { "layer": "chrome", "rules": [{ "ids": ["hero"], "style": { "color": "red" } }] },
        { "layer": "chrome", "rules": [{ "ids": ["footer"], "style": { "color": "blue" } }] }
    ] }"#;
    let err = generate(rules, PAGE).unwrap_err();
    assert!(matches!(err, Error::DuplicateLayer(name) if name == "chrome"));
}

#[test]
fn test_manifest_rejects_bad_json() {
    assert!(Manifest::from_json("{ not json").is_err());
    assert!(Manifest::from_json(r#"{ "entries": [{ "style": {} }] }"#).is_err());
}

#[test]
fn test_file_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let manifest_path = temp_dir.path().join("rules.json");
    let html_path = temp_dir.path().join("page.html");
    let css_path = temp_dir.path().join("page.css");

    fs::write(&manifest_path, RULES).expect("Failed to write manifest");
    fs::write(&html_path, PAGE).expect("Failed to write page");

    let json = fs::read_to_string(&manifest_path).expect("Failed to read manifest");
    let manifest = Manifest::from_json(&json).expect("Failed to parse manifest");
    let document = HtmlIndex::from_file(&html_path).expect("Failed to index page");

    let mut registry = Registry::new(document);
    registry.begin().expect("Failed to begin");
    manifest.apply(&mut registry).expect("Failed to apply manifest");
    let sheet = registry.build().expect("Failed to build");

    fs::write(&css_path, sheet.text()).expect("Failed to write stylesheet");
    let written = fs::read_to_string(&css_path).expect("Failed to read stylesheet");

    assert_eq!(written, sheet.text());
    assert!(written.starts_with("@layer chrome, main;\n"));
}

#[test]
fn test_missing_document_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = HtmlIndex::from_file(temp_dir.path().join("absent.html")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
