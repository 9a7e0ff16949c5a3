//! Sidebar and mobile-menu navigation.

use folio::content::NavLink;
use leptos::prelude::*;

#[cfg(test)]
#[path = "nav_links_test.rs"]
mod nav_links_test;

/// Which navigation surface is rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavStyle {
    /// Large stacked buttons in the mobile overlay.
    Menu,
    /// Small pills at the bottom of the desktop sidebar.
    Sidebar,
}

/// Class list for one nav entry.
pub fn nav_link_class(style: NavStyle, is_active: bool) -> String {
    let base = match style {
        NavStyle::Menu => "nav-link nav-link--menu",
        NavStyle::Sidebar => "nav-link nav-link--sidebar",
    };
    if is_active { format!("{base} nav-link--active") } else { base.to_owned() }
}

/// Navigation list. `on_navigate` fires after any entry is clicked.
#[component]
pub fn NavLinks(
    links: Vec<NavLink>,
    style: NavStyle,
    #[prop(optional)] on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let items = links
        .into_iter()
        .map(|item| {
            view! {
                <a
                    href=item.url
                    class=nav_link_class(style, item.is_active)
                    on:click=move |_| {
                        if let Some(cb) = on_navigate {
                            cb.run(());
                        }
                    }
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    let class = match style {
        NavStyle::Menu => "nav nav--menu",
        NavStyle::Sidebar => "nav nav--sidebar",
    };
    view! { <nav class=class>{items}</nav> }
}
