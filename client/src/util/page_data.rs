//! Site content handed from the SSR shell to the hydrating client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server may load content from a file the WASM bundle has never seen.
//! The shell embeds it as a JSON `<script>` so hydration renders exactly the
//! same data the server did, without a second fetch.

use folio::SiteContent;

#[cfg(test)]
#[path = "page_data_test.rs"]
mod page_data_test;

/// Element id of the embedded JSON payload.
pub const SITE_CONTENT_ELEMENT_ID: &str = "site-content";

/// Serialize content for embedding inside a `<script>` element.
///
/// `</` is escaped so the payload cannot close the script tag early.
pub fn encode_site_content(content: &SiteContent) -> String {
    serde_json::to_string(content)
        .map(|json| json.replace("</", "<\\/"))
        .unwrap_or_default()
}

/// Parse an embedded payload back into content.
pub fn decode_site_content(raw: &str) -> Option<SiteContent> {
    serde_json::from_str(raw).ok()
}

/// Read the payload the shell embedded in the current document.
pub fn read_embedded_content() -> Option<SiteContent> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(SITE_CONTENT_ELEMENT_ID))
            .and_then(|el| el.text_content())?;
        let content = decode_site_content(&raw);
        if content.is_none() {
            log::warn!("embedded site content is malformed; using built-in content");
        }
        content
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
