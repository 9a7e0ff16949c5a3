use super::*;

#[test]
fn active_entries_get_modifier() {
    assert_eq!(nav_link_class(NavStyle::Sidebar, true), "nav-link nav-link--sidebar nav-link--active");
    assert_eq!(nav_link_class(NavStyle::Menu, false), "nav-link nav-link--menu");
}
