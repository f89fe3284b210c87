//! Pipeline tests that never leave the local machine: extraction and
//! composition run on inline HTML, and failure paths use unparseable or
//! unroutable URLs.

use brochure_gen::{
    Audience, BrochureError, BrochureService, CompletionConfig, ContentExtractor, Fetcher,
    PromptComposer, DEFAULT_MAX_LINKS, MAX_TEXT_CHARS,
};

const COMPANY_URL: &str = "https://copperline.example";

const COMPANY_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Copperline Logistics</title>
  <script>window.analytics = {};</script>
</head>
<body>
  <nav>
    <a href="/">Home</a>
    <a href="/product">Product</a>
    <a href="/pricing">Pricing</a>
    <a href="/careers">Careers</a>
    <a href="https://social.example/copperline">Follow us</a>
  </nav>
  <main>
    <h1>Planning software dispatchers actually like</h1>
    <p>Copperline keeps every route, driver and delay on one screen.</p>
    <p>Changes made in the field reach head office in seconds.</p>
  </main>
</body>
</html>"#;

fn test_config() -> CompletionConfig {
    CompletionConfig::new("sk-test-0123456789abcdefghij".to_string())
}

#[test]
fn extractor_returns_bounded_absolute_links_and_visible_text() {
    let content = ContentExtractor::new()
        .extract(COMPANY_PAGE, COMPANY_URL)
        .unwrap();

    // Four relative anchors on the page, capped at the default bound.
    assert_eq!(content.links.len(), DEFAULT_MAX_LINKS);
    for link in &content.links {
        assert!(link.starts_with("https://copperline.example/"), "{link}");
    }
    let unique: std::collections::HashSet<_> = content.links.iter().collect();
    assert_eq!(unique.len(), content.links.len());

    assert!(content.text.contains("Planning software dispatchers actually like"));
    assert!(!content.text.contains("window.analytics"));
    assert!(content.text.chars().count() <= MAX_TEXT_CHARS);
}

#[test]
fn prompt_sections_appear_in_fixed_order() {
    let content = ContentExtractor::new()
        .extract(COMPANY_PAGE, COMPANY_URL)
        .unwrap();
    let prompt = PromptComposer::new().compose(COMPANY_URL, Audience::Recruit, &content);

    let directive = prompt.find("aimed at Recruits").expect("opening directive");
    let text_block = prompt.find(&content.text).expect("website text");
    let first_link = prompt
        .find(&format!("- {}", content.links[0]))
        .expect("link bullet");
    let example = prompt
        .find(Audience::Recruit.example())
        .expect("example brochure");
    let closing = prompt
        .rfind("tailored to Recruits")
        .expect("closing directive");

    assert!(directive < text_block);
    assert!(text_block < first_link);
    assert!(first_link < example);
    assert!(example < closing);
}

#[test]
fn unknown_audience_is_a_lookup_error() {
    let err = Audience::parse("shareholder").unwrap_err();
    assert!(matches!(err, BrochureError::UnknownAudience(_)));
}

#[tokio::test]
async fn invalid_url_short_circuits_before_any_network_call() {
    let service = BrochureService::new(test_config());

    let mut sink = CollectSink::default();
    let err = service
        .generate("not-a-valid-url", Audience::Client, &mut sink)
        .await
        .unwrap_err();

    assert!(matches!(err, BrochureError::UrlParseError(_)));
    // Nothing was generated, so nothing reached the sink.
    assert!(sink.received.is_empty());
}

#[tokio::test]
async fn unreachable_host_is_a_fetch_failure() {
    // Port 1 on loopback refuses the connection without leaving the machine.
    let err = Fetcher::new()
        .fetch("http://127.0.0.1:1/")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BrochureError::FetchError(_) | BrochureError::TimeoutError(_)
    ));
}

#[derive(Default)]
struct CollectSink {
    received: Vec<String>,
}

impl brochure_gen::OutputSink for CollectSink {
    fn emit(&mut self, fragment: &str) {
        self.received.push(fragment.to_string());
    }
}
