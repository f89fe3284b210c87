use crate::{Audience, SiteContent};
use tracing::debug;

/// Renders the instruction sent to the completion model. The section order
/// is fixed: directive, website text, links, example brochure, closing
/// directive.
#[derive(Clone, Default)]
pub struct PromptComposer;

impl PromptComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(&self, url: &str, audience: Audience, content: &SiteContent) -> String {
        let label = audience.label();

        let links = content
            .links
            .iter()
            .map(|link| format!("- {}", link))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = format!(
            "Write a short marketing brochure about the company at {url}, aimed at {label}s. \
             Base every claim on the website content below and keep the tone of the example.\n\
             \n\
             Website content:\n\
             ---\n\
             {text}\n\
             ---\n\
             \n\
             Pages worth mentioning:\n\
             {links}\n\
             \n\
             Example brochure for this audience:\n\
             \n\
             {example}\n\
             \n\
             Now write the brochure for {url}, tailored to {label}s, in markdown.",
            url = url,
            label = label,
            text = content.text,
            links = links,
            example = audience.example(),
        );

        debug!(
            url = %url,
            audience = %audience,
            prompt_chars = prompt.chars().count(),
            "Composed generation prompt"
        );

        prompt
    }
}
