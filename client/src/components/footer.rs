//! Page footer with credits and copyright.

use leptos::prelude::*;

use crate::state::site::SiteState;
use crate::util::markdown::render_inline_html;

#[component]
pub fn Footer() -> impl IntoView {
    let site = expect_context::<SiteState>();
    let footer = &site.content.footer;
    let credits = render_inline_html(&footer.credits_markdown);

    view! {
        <footer class="footer">
            <p class="footer__credits" inner_html=credits></p>
            <p>{footer.copyright.clone()}</p>
        </footer>
    }
}
