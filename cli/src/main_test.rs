use folio::{AffiliationRecord, Theme, place_in_grid};

use super::*;

#[test]
fn render_grid_marks_empty_cells() {
    let grid = place_in_grid(&[
        AffiliationRecord::new("a1", "One", "one.png").with_slot(0),
        AffiliationRecord::new("a2", "Two", "two.png").with_slot(4),
    ]);
    assert_eq!(render_grid(&grid), "a1 | .  | .\n.  | a2 | .\n.  | .  | .");
}

#[test]
fn render_grid_of_empty_assignment() {
    assert_eq!(render_grid(&GridSlotAssignment::empty()), ". | . | .\n. | . | .\n. | . | .");
}

#[test]
fn built_in_content_renders_three_affiliations() {
    let rendered = render_grid(&SiteContent::default().affiliation_grid());
    let first_row = rendered.lines().next().unwrap_or_default();
    assert!(first_row.starts_with("a1"));
    assert!(first_row.ends_with("a2"));
    assert!(rendered.lines().nth(1).unwrap_or_default().contains("a3"));
}

#[test]
fn grid_reads_content_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    std::fs::write(&path, serde_json::to_string(&SiteContent::default()).unwrap()).unwrap();
    run_grid(&GridArgs { content: Some(path) }).unwrap();
}

#[test]
fn grid_reports_unsupported_content_file() {
    let err = run_grid(&GridArgs { content: Some(PathBuf::from("site.toml")) }).unwrap_err();
    assert!(matches!(err, CliError::Content(ContentError::Read { .. })));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    std::fs::write(&path, "").unwrap();
    let err = run_grid(&GridArgs { content: Some(path) }).unwrap_err();
    assert!(matches!(err, CliError::Content(ContentError::Format(_))));
}

#[test]
fn theme_toggle_persists_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let args = StoreArgs { store: path.clone(), prefers_dark: true };

    run_theme(ThemeSubcommand::Toggle(StoreArgs { store: path.clone(), prefers_dark: true })).unwrap();
    assert_eq!(FileStore::new(&path).get_preference().unwrap(), ThemePreference::Light);

    let mut surface = ScopeFlag::default();
    resolver(&args).resolve_initial_theme(&mut surface);
    assert_eq!(surface.applied(), Some(Theme::Light));
}

#[test]
fn theme_show_surfaces_malformed_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "[1, 2]").unwrap();
    let err = run_theme(ThemeSubcommand::Show(StoreArgs { store: path, prefers_dark: false })).unwrap_err();
    assert!(matches!(err, CliError::Store(StoreError::NotAnObject(_))));
}

#[test]
fn labels_for_unset_values() {
    assert_eq!(describe_preference(ThemePreference::Unset), "unset");
    assert_eq!(describe_preference(ThemePreference::Dark), "dark");
    assert_eq!(surface_label(ScopeFlag::default()), "unset");
}
