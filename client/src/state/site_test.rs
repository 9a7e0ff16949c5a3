use super::*;

#[test]
fn grid_is_placed_from_content() {
    let site = SiteState::default();
    assert_eq!(site.grid.occupied_count(), 3);
    assert_eq!(site.grid.get(4).map(|r| r.id.as_str()), Some("a3"));
}

#[test]
fn clones_share_the_same_grid() {
    let site = SiteState::default();
    let other = site.clone();
    assert!(Arc::ptr_eq(&site.grid, &other.grid));
}
