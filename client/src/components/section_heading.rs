//! Section title with a trailing hairline.

use leptos::prelude::*;

#[component]
pub fn SectionHeading(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <h2 class="section-heading">
            {title}
            <div class="section-heading__rule"></div>
        </h2>
    }
}
