//! The single portfolio page: sidebar plus bio, news, and research.

use leptos::prelude::*;

use crate::components::bio_section::BioSection;
use crate::components::footer::Footer;
use crate::components::news_section::NewsSection;
use crate::components::research_section::ResearchSection;
use crate::components::sidebar::Sidebar;
use crate::util::reveal::Reveal;

/// Home page layout.
#[component]
pub fn HomePage() -> impl IntoView {
    let sections = [Reveal::rise(0), Reveal::rise(100), Reveal::rise(200)];

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main">
                <div class="page__column">
                    <section class=sections[0].class() style=sections[0].style()>
                        <BioSection/>
                    </section>
                    <section class=sections[1].class() style=sections[1].style()>
                        <NewsSection/>
                    </section>
                    <section class=sections[2].class() style=sections[2].style()>
                        <ResearchSection/>
                    </section>
                    <Footer/>
                </div>
            </main>
        </div>
    }
}
