//! Streaming chat-completion client.
//!
//! One prompt in, one streamed document out. Each content delta is pushed to
//! the caller's [`OutputSink`] the moment it arrives, and the assembled text
//! is returned once the stream ends.

use crate::llm_config::CompletionConfig;
use crate::BrochureError;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use futures::{Stream, StreamExt};
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Lifecycle of a single generation call. No transition leads back to
/// `Idle`; every invocation ends in `Completed` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Requesting,
    Streaming,
    Completed,
    Failed,
}

/// Receives brochure fragments in arrival order as the model produces them.
pub trait OutputSink: Send {
    fn emit(&mut self, fragment: &str);
}

/// Sink that prints fragments to stdout for real-time display.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, fragment: &str) {
        print!("{}", fragment);
        let _ = io::stdout().flush();
    }
}

#[derive(Clone)]
pub struct CompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Self {
        let openai_config = OpenAIConfig::new().with_api_key(config.api_key);
        Self {
            client: Client::with_config(openai_config),
            model: config.model,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Submit the prompt as a single user message and stream the reply.
    ///
    /// No retry and no request timeout: a dropped stream surfaces as
    /// [`BrochureError::StreamTransport`], which carries whatever text had
    /// already been emitted to the sink.
    #[instrument(level = "debug", skip(self, prompt, sink), err)]
    pub async fn stream_brochure(
        &self,
        prompt: String,
        sink: &mut dyn OutputSink,
    ) -> Result<String, BrochureError> {
        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| BrochureError::ExternalServiceError {
                service: "OpenAI".to_string(),
                message: e.to_string(),
            })?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![ChatCompletionRequestMessage::User(user_message)])
            .build()
            .map_err(|e| BrochureError::ExternalServiceError {
                service: "OpenAI".to_string(),
                message: e.to_string(),
            })?;

        let mut state = GenerationState::Requesting;
        debug!(state = ?state, model = %self.model, "Opening completion stream");

        let stream = self.client.chat().create_stream(request).await.map_err(|e| {
            BrochureError::ExternalServiceError {
                service: "OpenAI".to_string(),
                message: e.to_string(),
            }
        })?;

        state = GenerationState::Streaming;
        debug!(state = ?state, "Consuming completion stream");

        let deltas = stream.map(|chunk| match chunk {
            Ok(response) => Ok(response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.delta.content)),
            Err(e) => Err(e.to_string()),
        });

        match collect_deltas(deltas, sink).await {
            Ok(brochure) => {
                state = GenerationState::Completed;
                debug!(state = ?state, chars = brochure.chars().count(), "Stream finished");
                Ok(brochure)
            }
            Err(e) => {
                state = GenerationState::Failed;
                debug!(state = ?state, "Stream dropped");
                Err(e)
            }
        }
    }
}

/// Drain a stream of content deltas: emit each fragment to the sink as it
/// arrives and return the concatenation. Chunks without a content delta are
/// skipped. A transport error ends the stream with the partial text carried
/// in the error.
async fn collect_deltas<S>(
    mut deltas: S,
    sink: &mut dyn OutputSink,
) -> Result<String, BrochureError>
where
    S: Stream<Item = Result<Option<String>, String>> + Unpin,
{
    let mut assembled = String::new();

    while let Some(item) = deltas.next().await {
        match item {
            Ok(Some(fragment)) => {
                sink.emit(&fragment);
                assembled.push_str(&fragment);
            }
            Ok(None) => {}
            Err(message) => {
                return Err(BrochureError::StreamTransport {
                    message,
                    partial: assembled,
                });
            }
        }
    }

    Ok(assembled)
}
