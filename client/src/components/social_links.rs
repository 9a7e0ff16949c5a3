//! Row of social profile icons.

use folio::content::SocialLink;
use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};

/// Icon links opening in a new tab.
#[component]
pub fn SocialLinks(links: Vec<SocialLink>, #[prop(into)] link_class: String) -> impl IntoView {
    links
        .into_iter()
        .map(|link| {
            let glyph = Glyph::Social(link.icon);
            let label = link.name.clone();
            view! {
                <a
                    href=link.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class=link_class.clone()
                    aria-label=label
                    title=link.name
                >
                    <Icon glyph=glyph/>
                </a>
            }
        })
        .collect_view()
}
