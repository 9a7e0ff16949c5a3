use std::path::Path;

use super::*;

const MINIMAL_YAML: &str = r#"
personal:
  name: Ada Lovelace
  short_name: A Lovelace
  email: ada@example.com
  role: Analyst
  affiliation: Analytical Engine
  portrait_url: /assets/images/ada.png
greeting: Hello!
bio_markdown: |
  I write notes on [engines](https://example.org).
affiliations:
  - id: a1
    name: Cambridge
    logo_reference: /assets/images/cam.png
    preferred_slot: 4
  - id: a2
    name: London
    logo_reference: /assets/images/ldn.png
    preferred_slot: 12
footer:
  credits_markdown: Built by hand.
  copyright: "© Ada 1843"
"#;

#[test]
fn yaml_parses_and_places_grid() {
    let content = parse(Path::new("site.yaml"), MINIMAL_YAML).unwrap();
    assert_eq!(content.personal.name, "Ada Lovelace");
    assert!(content.news.is_empty());
    let grid = content.affiliation_grid();
    assert_eq!(grid.position_of("a1"), Some(4));
    assert_eq!(grid.position_of("a2"), None);
}

#[test]
fn json_extension_is_case_insensitive() {
    let raw = serde_json::to_string(&SiteContent::default()).unwrap();
    assert_eq!(parse(Path::new("site.JSON"), &raw).unwrap(), SiteContent::default());
}

#[test]
fn unknown_extension_is_rejected() {
    let err = parse(Path::new("site.toml"), "").unwrap_err();
    assert!(matches!(err, ContentError::Format(_)));
}

#[test]
fn malformed_yaml_names_the_file() {
    let err = parse(Path::new("broken.yml"), "personal: [").unwrap_err();
    assert!(matches!(err, ContentError::Yaml { .. }));
    assert!(err.to_string().contains("broken.yml"));
}

#[test]
fn malformed_json_is_json_error() {
    let err = parse(Path::new("site.json"), "{").unwrap_err();
    assert!(matches!(err, ContentError::Json { .. }));
}

#[test]
fn load_reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.yml");
    std::fs::write(&path, MINIMAL_YAML).unwrap();
    assert_eq!(load(&path).unwrap().greeting, "Hello!");
}

#[test]
fn load_missing_file_is_read_error() {
    let err = load(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(matches!(err, ContentError::Read { .. }));
}
