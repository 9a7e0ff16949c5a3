use super::*;

fn options() -> LeptosOptions {
    LeptosOptions::builder().output_name("folio").build()
}

#[test]
fn new_places_grid_once_for_all_requests() {
    let state = AppState::new(options(), SiteContent::default());
    let cloned = state.clone();
    assert!(std::sync::Arc::ptr_eq(&state.site.grid, &cloned.site.grid));
    assert_eq!(state.site.grid.occupied_count(), 3);
}

#[test]
fn leptos_options_are_extractable() {
    let state = AppState::new(options(), SiteContent::default());
    let options = LeptosOptions::from_ref(&state);
    assert_eq!(options.site_pkg_dir, state.leptos_options.site_pkg_dir);
}
