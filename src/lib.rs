use async_trait::async_trait;

mod audience;
mod client;
mod composer;
mod error;
mod extractor;
mod fetcher;
mod llm_config;
mod logging;
mod service;
mod utils;

pub use audience::Audience;
pub use client::{CompletionClient, GenerationState, OutputSink, StdoutSink};
pub use composer::PromptComposer;
pub use error::BrochureError;
pub use extractor::{ContentExtractor, SiteContent, DEFAULT_MAX_LINKS, MAX_TEXT_CHARS};
pub use fetcher::{Fetcher, FetcherConfig};
pub use llm_config::{ApiKeyValidator, CompletionConfig};
pub use logging::{log_brochure_card, log_error_card, setup_logging, LogConfig, LogLevelGuard};
pub use service::BrochureService;

#[async_trait]
pub trait BrochureGenerator {
    /// Generate the brochure for a company website, streaming fragments to
    /// stdout as they arrive and returning the assembled document.
    async fn generate_brochure(
        &self,
        url: &str,
        audience: Audience,
    ) -> Result<String, BrochureError>;
}
