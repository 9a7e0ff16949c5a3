//! Site content loading.
//!
//! Content is read once at startup. YAML is the authoring format; JSON is
//! accepted for generated files.

use std::path::Path;

use folio::SiteContent;

use crate::config::ConfigError;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Load content from `path`, or the built-in content when `path` is `None`.
///
/// # Errors
///
/// Returns [`ConfigError::Content`] when the file cannot be read, has an
/// unknown extension, or does not match the content schema.
pub fn load_content(path: Option<&Path>) -> Result<SiteContent, ConfigError> {
    let Some(path) = path else {
        tracing::info!("using built-in site content");
        return Ok(SiteContent::default());
    };

    let content = folio::content::load(path)?;
    tracing::info!(
        path = %path.display(),
        affiliations = content.affiliations.len(),
        news = content.news.len(),
        papers = content.papers.len(),
        "loaded site content"
    );
    Ok(content)
}
