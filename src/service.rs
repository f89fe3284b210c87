use crate::{
    Audience, BrochureError, BrochureGenerator, CompletionClient, CompletionConfig,
    ContentExtractor, Fetcher, OutputSink, PromptComposer, StdoutSink,
};
use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

/// The whole pipeline in one place: fetch the company website, extract text
/// and links, compose the audience-specific prompt, stream the brochure.
///
/// The three stages run strictly in order; a fetch or extraction failure
/// returns before the composer or completion client is ever touched.
#[derive(Clone)]
pub struct BrochureService {
    fetcher: Fetcher,
    extractor: ContentExtractor,
    composer: PromptComposer,
    client: CompletionClient,
}

impl BrochureService {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            fetcher: Fetcher::new(),
            extractor: ContentExtractor::new(),
            composer: PromptComposer::new(),
            client: CompletionClient::new(config),
        }
    }

    /// Build the service from the environment, failing fast on a missing or
    /// malformed credential.
    pub fn from_env() -> Result<Self, BrochureError> {
        Ok(Self::new(CompletionConfig::from_env()?))
    }

    pub fn new_with_fetcher(config: CompletionConfig, fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            extractor: ContentExtractor::new(),
            composer: PromptComposer::new(),
            client: CompletionClient::new(config),
        }
    }

    pub fn with_extractor(mut self, extractor: ContentExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Generate the brochure, streaming fragments into `sink` as they
    /// arrive and returning the assembled document.
    #[instrument(level = "debug", skip(self, sink), err)]
    pub async fn generate(
        &self,
        url: &str,
        audience: Audience,
        sink: &mut dyn OutputSink,
    ) -> Result<String, BrochureError> {
        let _ = Url::parse(url)?;

        debug!(url = %url, audience = %audience, "Starting brochure generation");

        let html = self.fetcher.fetch(url).await?;
        let content = self.extractor.extract(&html, url)?;
        let prompt = self.composer.compose(url, audience, &content);

        self.client.stream_brochure(prompt, sink).await
    }
}

#[async_trait]
impl BrochureGenerator for BrochureService {
    async fn generate_brochure(
        &self,
        url: &str,
        audience: Audience,
    ) -> Result<String, BrochureError> {
        let mut sink = StdoutSink;
        self.generate(url, audience, &mut sink).await
    }
}
