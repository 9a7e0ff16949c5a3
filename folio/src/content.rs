//! Site content model and the built-in portfolio data.
//!
//! All content is static configuration. The server can replace the built-in
//! [`SiteContent::default`] with a YAML or JSON file; the client only ever
//! receives it already loaded.

#[cfg(feature = "yaml")]
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::affiliation::{AffiliationRecord, GridSlotAssignment, place_in_grid};

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

#[cfg(all(test, feature = "yaml"))]
#[path = "content_file_test.rs"]
mod content_file_test;

/// Identity block shown at the top of the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    /// Name as it appears in author lists, e.g. `"P Katari"`.
    pub short_name: String,
    pub email: String,
    pub role: String,
    pub affiliation: String,
    pub portrait_url: String,
}

/// Icon drawn for a social link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialIcon {
    Cv,
    #[serde(rename = "github")]
    GitHub,
    GoogleScholar,
    #[serde(rename = "linkedin")]
    LinkedIn,
    Twitter,
    Email,
    #[default]
    Link,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: SocialIcon,
}

/// Sidebar / mobile-menu navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub is_active: bool,
}

/// One entry of the news timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub date: String,
    pub content: String,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchPaper {
    pub id: String,
    pub title: String,
    pub venue: String,
    pub paper_url: String,
    pub image_url: String,
    pub description: String,
    #[serde(default)]
    pub collaborators: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterCredits {
    /// Markdown credits line.
    pub credits_markdown: String,
    pub copyright: String,
}

/// Everything the page renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub personal: PersonalInfo,
    /// Heading above the biography.
    pub greeting: String,
    /// Biography body as Markdown. Raw HTML is not rendered.
    pub bio_markdown: String,
    /// Closing call-out below the biography.
    #[serde(default)]
    pub bio_callout: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    #[serde(default)]
    pub affiliations: Vec<AffiliationRecord>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub papers: Vec<ResearchPaper>,
    pub footer: FooterCredits,
}

impl SiteContent {
    /// Grid placement for this content's affiliations.
    #[must_use]
    pub fn affiliation_grid(&self) -> GridSlotAssignment {
        place_in_grid(&self.affiliations)
    }

    /// Whether `author` is the site owner in a collaborator list.
    #[must_use]
    pub fn is_owner(&self, author: &str) -> bool {
        author.trim() == self.personal.short_name
    }

    /// `mailto:` link for the owner's address.
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.personal.email)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            personal: PersonalInfo {
                name: "Prajeet Katari".to_owned(),
                short_name: "P Katari".to_owned(),
                email: "katariprajeet26@gmail.com".to_owned(),
                role: "Research Associate".to_owned(),
                affiliation: "IISc, Bangalore".to_owned(),
                portrait_url: "/assets/images/image_me.jpg".to_owned(),
            },
            greeting: "Aloha!".to_owned(),
            bio_markdown: DEFAULT_BIO.to_owned(),
            bio_callout: Some(
                "I am always up for new collaborations, drop me an email if you want to chat!".to_owned(),
            ),
            social_links: vec![
                social(
                    "CV",
                    "https://drive.google.com/file/d/17S7esvQ7jKZl0-1AjCz8n4tMWdWhLYml/view?usp=sharing",
                    SocialIcon::Cv,
                ),
                social("GitHub", "https://github.com/prajeet26", SocialIcon::GitHub),
                social(
                    "Google Scholar",
                    "https://scholar.google.com/citations?hl=en&user=pjH7Ci0AAAAJ",
                    SocialIcon::GoogleScholar,
                ),
                social(
                    "LinkedIn",
                    "https://www.linkedin.com/in/prajeet-katari-6769331a1/",
                    SocialIcon::LinkedIn,
                ),
            ],
            nav_links: vec![
                NavLink { label: "Home".to_owned(), url: "#".to_owned(), is_active: true },
                NavLink {
                    label: "Blog @Medium".to_owned(),
                    url: "https://medium.com/@katariprajeet26".to_owned(),
                    is_active: false,
                },
            ],
            // Triangle pattern: top-left, top-right, center.
            affiliations: vec![
                AffiliationRecord::new("a1", "IISc Bangalore", "/assets/images/IISc_Master_Seal_Black.jpg")
                    .with_link("#")
                    .with_slot(0),
                AffiliationRecord::new("a2", "NSUT", "/assets/images/nsut_vector.png")
                    .with_link("#")
                    .with_slot(2),
                AffiliationRecord::new("a3", "IIT Patna", "/assets/images/iitp-logo.png")
                    .with_link("#")
                    .with_slot(4),
            ],
            news: vec![
                news("n1", "Jan 2025", "Medprom accepted to ACM Transactions on Computing for Healthcare! 🎉", true),
                news("n2", "Dec 2024", "Started collaborating to project VAANI.", false),
                news("n3", "Aug 2024", "Started as RA at IACV, IISc.", false),
                news("n4", "June 2024", "Graduated, phew!", false),
            ],
            papers: vec![
                ResearchPaper {
                    id: "p1".to_owned(),
                    title: "MedProm: Bridging Dialogue Gaps in Healthcare with Knowledge-Enhanced Generative Models"
                        .to_owned(),
                    venue: "ACM Transactions on Computing for Healthcare".to_owned(),
                    paper_url: "/assets/files/MedProm_Paper.pdf".to_owned(),
                    image_url: "/assets/images/p1.png".to_owned(),
                    description: "MedProm is a knowledge-enhanced generative model for medical dialogue systems, \
                        integrating the MediConnect Graph to improve context-aware responses. It leverages BioGPT \
                        and curriculum learning for precise, coherent, and medically relevant conversations."
                        .to_owned(),
                    collaborators: names(&["D Varshney", "N Behera", "P Katari", "A Ekbal"]),
                },
                ResearchPaper {
                    id: "p2".to_owned(),
                    title: "Multimodal BERT for Identifying Claims in Tweets".to_owned(),
                    venue: "CLEF 2022, Bologna, Italy".to_owned(),
                    paper_url: "https://ceur-ws.org/Vol-3180/paper-55.pdf".to_owned(),
                    image_url: "/assets/images/p2.png".to_owned(),
                    description: "A Multimodal BERT-based approach for identifying claim check-worthiness, \
                        verifiability, and harmful content in tweets, achieving top-3 ranks in CheckThat! Lab 2022."
                        .to_owned(),
                    collaborators: names(&["M Suri", "P Katari", "S Dudeja"]),
                },
            ],
            footer: FooterCredits {
                credits_markdown: "Website based on [minimal](https://github.com/orderedlist/minimal) and inspired \
                    by [David Abel](https://david-abel.github.io/)."
                    .to_owned(),
                copyright: "© Prajeet Katari 2025".to_owned(),
            },
        }
    }
}

const DEFAULT_BIO: &str = "\
I am a Research Associate at the IACV Lab, IISc Bangalore, advised by Prof. \
[Soma Biswas](https://sites.google.com/iisc.ac.in/somabiswas). My research focuses on improving the \
reasoning and reliability of large-scale vision and language systems, with an emphasis on real-world, \
noisy, and culturally grounded data.

My work spans across:

- MLLMs alignment for spontaneous speech and culturally grounded data. Leading vision analysis for \
[VAANI](https://vaani.iisc.ac.in/), by Google, working across noisy, culturally diverse multimodal data \
(vision, speech, text) to quantify how MLMMs/VLMs interpret Indian images vs. human perception.
- LLM-guided Active Learning for Multimodal Analysis of open source information.

Before starting my time at IISc, I had also worked as a data intern at [DataFinz](https://datafinz.com/) \
building efficient stage-wise processes by implementing an end-to-end ETL pipeline. I'm currently also a \
Researcher collaborating with [Deeksha Varshney](https://www.linkedin.com/in/deeksha-varshney-5922b57b/) \
at IIT Patna. This is where I collaborated on MedProm, designed to generate contextually relevant medical \
insights for dialogue systems.
";

fn social(name: &str, url: &str, icon: SocialIcon) -> SocialLink {
    SocialLink { name: name.to_owned(), url: url.to_owned(), icon }
}

fn news(id: &str, date: &str, content: &str, highlight: bool) -> NewsItem {
    NewsItem { id: id.to_owned(), date: date.to_owned(), content: content.to_owned(), highlight }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| (*name).to_owned()).collect()
}

// =============================================================================
// CONTENT FILES
// =============================================================================

/// Failure to load a content file. Every variant names the file.
#[cfg(feature = "yaml")]
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content file {path} could not be read: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("content file {path} is not valid YAML: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("content file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("content file {0} has an unsupported extension (use .yaml, .yml, or .json)")]
    Format(PathBuf),
}

/// Read and parse the content file at `path`.
///
/// # Errors
///
/// Returns [`ContentError::Read`] when the file cannot be read, otherwise the
/// error from [`parse`].
#[cfg(feature = "yaml")]
pub fn load(path: &Path) -> Result<SiteContent, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read { path: path.to_path_buf(), source })?;
    parse(path, &raw)
}

/// Parse `raw` by the extension of `path`: `.yaml`/`.yml` or `.json`, in any case.
///
/// # Errors
///
/// Returns [`ContentError::Format`] for other extensions and the matching
/// parse error when `raw` does not fit the content schema.
#[cfg(feature = "yaml")]
pub fn parse(path: &Path, raw: &str) -> Result<SiteContent, ContentError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("yaml" | "yml") => {
            serde_yaml::from_str(raw).map_err(|source| ContentError::Yaml { path: path.to_path_buf(), source })
        }
        Some("json") => {
            serde_json::from_str(raw).map_err(|source| ContentError::Json { path: path.to_path_buf(), source })
        }
        _ => Err(ContentError::Format(path.to_path_buf())),
    }
}
