use axum::http::HeaderValue;
use axum::http::header::COOKIE;
use client::app::ThemedDocument;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;

use super::*;

fn render_root(cookie: &str) -> String {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
    let theme = resolve_request_theme(&CookieJar::from_headers(&headers), &headers);

    Owner::new().with(|| {
        page_context(theme, SiteState::default())();
        view! {
            <ThemedDocument>
                <body></body>
            </ThemedDocument>
        }
        .to_html()
    })
}

#[test]
fn dark_cookie_renders_dark_root() {
    let html = render_root("theme=dark");
    assert!(html.contains(r#"data-theme="dark""#), "{html}");
    assert!(html.contains(r#"class="dark""#), "{html}");
}

#[test]
fn light_cookie_renders_light_root() {
    let html = render_root("theme=light");
    assert!(html.contains(r#"data-theme="light""#), "{html}");
    assert!(!html.contains(r#"class="dark""#), "{html}");
}

#[test]
fn page_context_provides_site_content() {
    Owner::new().with(|| {
        page_context(Theme::Dark, SiteState::default())();
        let site = use_context::<SiteState>().unwrap();
        assert_eq!(site.grid.occupied_count(), 3);
        assert_eq!(use_context::<InitialTheme>(), Some(InitialTheme(Theme::Dark)));
    });
}
