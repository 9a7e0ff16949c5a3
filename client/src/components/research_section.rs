//! "Research Updates" publication list.

use folio::SiteContent;
use folio::content::ResearchPaper;
use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::section_heading::SectionHeading;
use crate::state::site::SiteState;

#[cfg(test)]
#[path = "research_section_test.rs"]
mod research_section_test;

/// One name in a paper's author line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorCredit {
    pub name: String,
    /// The site owner; rendered emphasized.
    pub is_owner: bool,
    /// Whether a `", "` separator follows.
    pub trailing_comma: bool,
}

/// Author line for `paper`, marking the site owner.
pub fn author_credits(paper: &ResearchPaper, content: &SiteContent) -> Vec<AuthorCredit> {
    let last = paper.collaborators.len().saturating_sub(1);
    paper
        .collaborators
        .iter()
        .enumerate()
        .map(|(i, name)| AuthorCredit { name: name.clone(), is_owner: content.is_owner(name), trailing_comma: i < last })
        .collect()
}

#[component]
pub fn ResearchSection() -> impl IntoView {
    let site = expect_context::<SiteState>();
    let papers = site
        .content
        .papers
        .iter()
        .map(|paper| view! { <PaperCard paper=paper.clone() credits=author_credits(paper, &site.content)/> })
        .collect_view();

    view! {
        <div class="research">
            <SectionHeading title="Research Updates"/>
            <div class="research__list">{papers}</div>
        </div>
    }
}

#[component]
fn PaperCard(paper: ResearchPaper, credits: Vec<AuthorCredit>) -> impl IntoView {
    let authors = credits
        .into_iter()
        .map(|credit| {
            let name = if credit.is_owner {
                view! { <span class="research__author--owner">{credit.name}</span> }.into_any()
            } else {
                view! { <span>{credit.name}</span> }.into_any()
            };
            let comma = credit.trailing_comma.then_some(", ");
            view! { <span>{name}{comma}</span> }
        })
        .collect_view();

    let ResearchPaper { title, venue, paper_url, image_url, description, .. } = paper;
    let alt = title.clone();
    let title_href = paper_url.clone();

    view! {
        <article class="research__paper">
            <div class="research__thumb">
                <div class="research__thumb-frame">
                    <img src=image_url alt=alt class="research__thumb-image"/>
                </div>
            </div>
            <div class="research__body">
                <h3 class="research__title">
                    <a href=title_href target="_blank" rel="noopener noreferrer">{title}</a>
                </h3>
                <div class="research__venue">{venue}</div>
                <div class="research__links">
                    <a href=paper_url target="_blank" rel="noopener noreferrer" class="research__badge">
                        "PAPER " <Icon glyph=Glyph::ExternalLink size=10/>
                    </a>
                </div>
                <p class="research__description">{description}</p>
                <div class="research__authors">{authors}</div>
            </div>
        </article>
    }
}
