//! "Recent News" timeline.

use folio::content::NewsItem;
use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::state::site::SiteState;

#[cfg(test)]
#[path = "news_section_test.rs"]
mod news_section_test;

/// Timeline dot class; highlighted items use the accent color.
pub fn news_dot_class(item: &NewsItem) -> &'static str {
    if item.highlight { "news__dot news__dot--highlight" } else { "news__dot" }
}

pub fn news_date_class(item: &NewsItem) -> &'static str {
    if item.highlight { "news__date news__date--highlight" } else { "news__date" }
}

#[component]
pub fn NewsSection() -> impl IntoView {
    let site = expect_context::<SiteState>();
    let items = site
        .content
        .news
        .iter()
        .map(|item| {
            view! {
                <li class="news__item" data-id=item.id.clone()>
                    <div class=news_dot_class(item)></div>
                    <div class="news__row">
                        <span class=news_date_class(item)>{item.date.clone()}</span>
                        <p class="news__content">{item.content.clone()}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="news">
            <SectionHeading title="Recent News"/>
            <ul class="news__timeline">{items}</ul>
        </div>
    }
}
