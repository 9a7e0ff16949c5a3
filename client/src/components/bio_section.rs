//! Greeting heading and Markdown biography.

use leptos::prelude::*;

use crate::state::site::SiteState;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn BioSection() -> impl IntoView {
    let site = expect_context::<SiteState>();
    let content = &site.content;
    let body = render_markdown_html(&content.bio_markdown);
    let callout = content
        .bio_callout
        .clone()
        .map(|text| view! { <p class="bio__callout">{text}</p> });

    view! {
        <div class="bio">
            <h1 class="bio__greeting">{content.greeting.clone()}</h1>
            <div class="bio__body prose" inner_html=body></div>
            {callout}
        </div>
    }
}
