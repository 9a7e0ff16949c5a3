use leptos::reactive::owner::Owner;

use super::*;

fn render_document(theme: Option<Theme>) -> String {
    Owner::new().with(|| {
        if let Some(theme) = theme {
            provide_context(InitialTheme(theme));
        }
        view! {
            <ThemedDocument>
                <body></body>
            </ThemedDocument>
        }
        .to_html()
    })
}

#[test]
fn dark_request_theme_reaches_html_root() {
    let html = render_document(Some(Theme::Dark));
    assert!(html.starts_with("<html"), "{html}");
    assert!(html.contains(r#"data-theme="dark""#), "{html}");
    assert!(html.contains(r#"class="dark""#), "{html}");
}

#[test]
fn light_request_theme_has_no_dark_class() {
    let html = render_document(Some(Theme::Light));
    assert!(html.contains(r#"data-theme="light""#), "{html}");
    assert!(!html.contains(r#"class="dark""#), "{html}");
}

#[test]
fn missing_request_theme_renders_light() {
    let html = render_document(None);
    assert!(html.contains(r#"data-theme="light""#), "{html}");
}

#[test]
fn request_theme_reads_context() {
    Owner::new().with(|| {
        assert_eq!(request_theme(), Theme::Light);
        provide_context(InitialTheme(Theme::Dark));
        assert_eq!(request_theme(), Theme::Dark);
    });
}

#[test]
fn boot_script_renders_inline_and_unescaped() {
    let html = view! { <ThemeBootScript/> }.to_html();
    assert!(html.starts_with("<script>"), "{html}");
    assert!(html.ends_with("</script>"), "{html}");
    assert!(html.contains(r#"s==="dark""#), "{html}");
}
