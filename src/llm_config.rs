//! Completion-endpoint configuration and credential validation.

use crate::BrochureError;

const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// API key validation utilities
pub struct ApiKeyValidator;

impl ApiKeyValidator {
    /// Validate OpenAI API key format
    pub fn validate_openai_key(api_key: &str) -> Result<(), BrochureError> {
        if api_key.is_empty() {
            return Err(BrochureError::InvalidConfiguration(
                "OpenAI API key cannot be empty".to_string(),
            ));
        }

        if !api_key.starts_with("sk-") {
            return Err(BrochureError::InvalidConfiguration(
                "OpenAI API key must start with 'sk-'".to_string(),
            ));
        }

        if api_key.len() < 20 {
            return Err(BrochureError::InvalidConfiguration(
                "OpenAI API key appears to be too short".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate that the model identifier belongs to a known OpenAI family.
    pub fn validate_model_name(model: &str) -> Result<(), BrochureError> {
        let valid_models = [
            "gpt-4",
            "gpt-4-turbo",
            "gpt-4o",
            "gpt-4o-mini",
            "gpt-3.5-turbo",
        ];

        if !valid_models.iter().any(|&m| model.starts_with(m)) {
            return Err(BrochureError::InvalidConfiguration(format!(
                "Unknown OpenAI model: {}. Valid models: {}",
                model,
                valid_models.join(", ")
            )));
        }

        Ok(())
    }
}

/// Credential and model identifier for the hosted completion endpoint,
/// threaded into [`crate::CompletionClient`] at construction.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub model: String,
}

impl CompletionConfig {
    /// Load and validate configuration from the environment.
    ///
    /// Fails fast with a descriptive message when `OPENAI_API_KEY` is absent
    /// or malformed, before any network call is attempted. `OPENAI_MODEL`
    /// optionally overrides the default model identifier.
    pub fn from_env() -> Result<Self, BrochureError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            BrochureError::InvalidConfiguration(
                "OPENAI_API_KEY environment variable not set".to_string(),
            )
        })?;

        ApiKeyValidator::validate_openai_key(&api_key)?;

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        ApiKeyValidator::validate_model_name(&model)?;

        Ok(Self { api_key, model })
    }

    /// Configuration with an explicit key and the default model.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_key_validation() {
        // Valid key
        assert!(ApiKeyValidator::validate_openai_key("sk-1234567890abcdefghij").is_ok());

        // Invalid keys
        assert!(ApiKeyValidator::validate_openai_key("").is_err());
        assert!(ApiKeyValidator::validate_openai_key("invalid").is_err());
        assert!(ApiKeyValidator::validate_openai_key("sk-short").is_err());
    }

    #[test]
    fn test_model_validation() {
        assert!(ApiKeyValidator::validate_model_name("gpt-4").is_ok());
        assert!(ApiKeyValidator::validate_model_name("gpt-4o-mini").is_ok());
        assert!(ApiKeyValidator::validate_model_name("invalid-model").is_err());
    }

    #[test]
    fn test_default_model() {
        let config = CompletionConfig::new("sk-1234567890abcdefghij".to_string());
        assert_eq!(config.model, "gpt-4o-mini");

        let config = config.with_model("gpt-4o".to_string());
        assert_eq!(config.model, "gpt-4o");
    }
}
