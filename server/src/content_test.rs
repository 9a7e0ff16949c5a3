use std::path::Path;

use folio::ContentError;

use super::*;

#[test]
fn no_path_uses_built_in_content() {
    assert_eq!(load_content(None).unwrap(), SiteContent::default());
}

#[test]
fn load_content_reads_json_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    let mut content = SiteContent::default();
    content.greeting = "Hello!".to_owned();
    std::fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

    assert_eq!(load_content(Some(&path)).unwrap(), content);
}

#[test]
fn load_content_missing_file_is_read_error() {
    let err = load_content(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Content(ContentError::Read { .. })));
    assert!(err.to_string().contains("here.yaml"));
}

#[test]
fn load_content_unknown_extension_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    std::fs::write(&path, "").unwrap();
    let err = load_content(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Content(ContentError::Format(_))));
}
