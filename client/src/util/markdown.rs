//! Markdown rendering for authored copy (bio, footer credits).

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

/// Render Markdown to HTML, dropping raw HTML blocks and inline HTML.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Render a single line of Markdown without the wrapping `<p>`.
pub fn render_inline_html(markdown: &str) -> String {
    let parser = Parser::new(markdown).filter(|event| {
        !matches!(
            event,
            Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph) | Event::Html(_) | Event::InlineHtml(_)
        )
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out.trim_end().to_owned()
}
