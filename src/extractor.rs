use crate::{utils, BrochureError};
use scraper::{ElementRef, Html, Node, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Character cap applied to the extracted website text.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Default bound on harvested same-origin links.
pub const DEFAULT_MAX_LINKS: usize = 3;

/// Tags whose text is never visible page content.
const SKIPPED_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "iframe", "svg", "canvas", "img", "input",
    "button", "select", "textarea", "head", "title", "meta", "link",
];

/// What the extractor hands to the prompt composer: the page's visible text
/// (capped) and a bounded list of absolute same-origin links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub text: String,
    pub links: Vec<String>,
}

/// Turns a fetched HTML body into [`SiteContent`].
#[derive(Clone)]
pub struct ContentExtractor {
    max_links: usize,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentExtractor {
    pub fn new() -> Self {
        Self {
            max_links: DEFAULT_MAX_LINKS,
        }
    }

    pub fn with_max_links(max_links: usize) -> Self {
        Self { max_links }
    }

    pub fn extract(&self, html: &str, url: &str) -> Result<SiteContent, BrochureError> {
        let document = Html::parse_document(html);

        let text = self.extract_text(&document);
        let links = self.harvest_links(&document, url)?;

        debug!(
            url = %url,
            text_chars = text.chars().count(),
            link_count = links.len(),
            "Extracted site content"
        );

        Ok(SiteContent { text, links })
    }

    /// Visible text nodes, trimmed, one per line, capped at
    /// [`MAX_TEXT_CHARS`] characters.
    fn extract_text(&self, document: &Html) -> String {
        let mut lines = Vec::new();

        // Walk from <body> when present so boilerplate in <head> never leaks
        // into the text.
        let start = Selector::parse("body")
            .ok()
            .and_then(|s| document.select(&s).next())
            .unwrap_or_else(|| document.root_element());

        collect_visible_text(start, &mut lines);

        let joined = lines.join("\n");
        if joined.chars().count() > MAX_TEXT_CHARS {
            joined.chars().take(MAX_TEXT_CHARS).collect()
        } else {
            joined
        }
    }

    /// Anchors with a site-relative href, resolved against the request's
    /// scheme+host. First-seen order, deduplicated, at most `max_links`.
    fn harvest_links(&self, document: &Html, url: &str) -> Result<Vec<String>, BrochureError> {
        let base = utils::site_root(url)?;

        let anchor_selector = Selector::parse("a")
            .map_err(|e| BrochureError::ExtractError(format!("Invalid selector: {}", e)))?;

        let mut links = Vec::new();
        for anchor in document.select(&anchor_selector) {
            if links.len() == self.max_links {
                break;
            }

            let href = match anchor.value().attr("href") {
                Some(href) => href.trim(),
                None => continue,
            };
            if !href.starts_with('/') {
                continue;
            }

            let absolute = format!("{}{}", base, href.trim_start_matches('/'));
            if !links.contains(&absolute) {
                links.push(absolute);
            }
        }

        Ok(links)
    }
}

fn collect_visible_text(element: ElementRef, lines: &mut Vec<String>) {
    if SKIPPED_TAGS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.text.trim();
                if !trimmed.is_empty() {
                    lines.push(trimmed.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_visible_text(child_element, lines);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_URL: &str = "https://acme.example/welcome";

    fn extract(html: &str) -> SiteContent {
        ContentExtractor::new().extract(html, BASE_URL).unwrap()
    }

    #[test]
    fn caps_links_at_max() {
        let html = r#"<html><body>
            <a href="/about">About</a>
            <a href="/careers">Careers</a>
            <a href="/products">Products</a>
            <a href="/blog">Blog</a>
            <a href="/contact">Contact</a>
        </body></html>"#;

        let content = extract(html);
        assert_eq!(
            content.links,
            vec![
                "https://acme.example/about",
                "https://acme.example/careers",
                "https://acme.example/products",
            ]
        );
    }

    #[test]
    fn fewer_anchors_than_max_returns_exact_count() {
        let html = r#"<html><body>
            <a href="/about">About</a>
            <a href="/careers">Careers</a>
        </body></html>"#;

        let content = extract(html);
        assert_eq!(content.links.len(), 2);
    }

    #[test]
    fn duplicate_and_external_hrefs_are_skipped() {
        let html = r#"<html><body>
            <a href="/about">About</a>
            <a href="/about">About again</a>
            <a href="https://elsewhere.example/about">External</a>
            <a href="mailto:team@acme.example">Mail</a>
            <a>No href</a>
        </body></html>"#;

        let content = extract(html);
        assert_eq!(content.links, vec!["https://acme.example/about"]);
    }

    #[test]
    fn port_is_kept_when_resolving_links() {
        let html = r#"<a href="/docs">Docs</a>"#;
        let content = ContentExtractor::new()
            .extract(html, "http://localhost:8080/")
            .unwrap();
        assert_eq!(content.links, vec!["http://localhost:8080/docs"]);
    }

    #[test]
    fn text_skips_non_visible_tags() {
        let html = r#"<html><head><title>Acme</title></head><body>
            <h1>  Acme Analytics  </h1>
            <script>var tracking = true;</script>
            <style>body { color: red; }</style>
            <p>Dashboards your team will actually read.</p>
        </body></html>"#;

        let content = extract(html);
        assert_eq!(
            content.text,
            "Acme Analytics\nDashboards your team will actually read."
        );
    }

    #[test]
    fn text_never_exceeds_cap() {
        let paragraph = format!("<p>{}</p>", "lorem ipsum dolor ".repeat(40));
        let html = format!("<html><body>{}</body></html>", paragraph.repeat(30));

        let content = extract(&html);
        assert!(content.text.chars().count() <= MAX_TEXT_CHARS);
    }

    #[test]
    fn max_links_is_configurable() {
        let html = r#"<body>
            <a href="/a">a</a><a href="/b">b</a><a href="/c">c</a><a href="/d">d</a>
        </body>"#;

        let content = ContentExtractor::with_max_links(2)
            .extract(html, BASE_URL)
            .unwrap();
        assert_eq!(content.links.len(), 2);
    }
}
