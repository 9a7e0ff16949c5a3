//! Root application component with routing and context providers.

use folio::Theme;
use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{site::SiteState, ui::UiState};
use crate::util::dark_mode;
use crate::util::page_data::{SITE_CONTENT_ELEMENT_ID, encode_site_content, read_embedded_content};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Theme resolved by the server for this request.
///
/// Provided as render context so the shell can stamp `<html>` before the
/// first byte reaches the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitialTheme(pub Theme);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let payload = use_context::<SiteState>()
        .map(|site| encode_site_content(&site.content))
        .unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <ThemedDocument>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="color-scheme" content="light dark"/>
                <ThemeBootScript/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <script id=SITE_CONTENT_ELEMENT_ID type="application/json" inner_html=payload></script>
            </head>
            <body>
                <App/>
            </body>
        </ThemedDocument>
    }
}

/// Theme the server resolved for this request; light when none was provided.
pub fn request_theme() -> Theme {
    use_context::<InitialTheme>().unwrap_or_default().0
}

/// `<html>` root tagged with the request's theme.
#[component]
pub fn ThemedDocument(children: Children) -> impl IntoView {
    let theme = request_theme();
    view! {
        <html lang="en" data-theme=theme.as_str() class=theme.is_dark().then_some("dark")>
            {children()}
        </html>
    }
}

/// Blocking script that corrects the server's guess from browser storage and
/// the media query before anything paints.
#[component]
pub fn ThemeBootScript() -> impl IntoView {
    view! { <script inner_html=dark_mode::boot_script()></script> }
}

/// Root application component.
///
/// Content comes from server context during SSR and from the embedded JSON
/// payload during hydration. The starting theme comes from the server's
/// resolution; once hydrated, the browser re-resolves against its own
/// storage and media query.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = use_context::<SiteState>()
        .or_else(|| read_embedded_content().map(SiteState::new))
        .unwrap_or_default();
    // On hydrate the root already carries the boot script's decision.
    let initial = use_context::<InitialTheme>()
        .map(|t| t.0)
        .or_else(dark_mode::read_applied)
        .unwrap_or_default();

    let ui = RwSignal::new(UiState::new(initial));
    provide_context(site.clone());
    provide_context(ui);

    // Client-only: localStorage may hold a newer choice than the cookie.
    Effect::new(move || {
        let is_dark = dark_mode::read_preference();
        if ui.get_untracked().is_dark() != is_dark {
            ui.update(|u| u.set_dark(is_dark));
        }
    });

    let personal = &site.content.personal;
    let title = format!("{} | {}", personal.name, personal.role);
    let description = format!("{}, {}", personal.role, personal.affiliation);

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
