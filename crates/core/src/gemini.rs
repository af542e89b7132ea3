use crate::config::Config;
use crate::error::{AppError, Result};
use crate::prompt::{build_caption_prompt, clean_caption};
use async_trait::async_trait;
use gemini_rust::{Content, Gemini, GenerationResponse, Message, Part, Role};
use tracing::{debug, info};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// Something that can turn a list of file names into a share caption.
///
/// The session drives generation through this trait so tests can swap in a
/// double for the network client.
#[async_trait]
pub trait CaptionService: Send + Sync {
    /// Returns a trimmed, non-empty caption for the given file names.
    async fn generate_caption(&self, file_names: &[String]) -> Result<String>;
}

pub struct GeminiClient {
    client: Option<Gemini>,
    model_name: String,
}

impl GeminiClient {
    /// Creates a client from configuration.
    ///
    /// A missing API key is not an error here; it is reported by
    /// [`CaptionService::generate_caption`] so the UI can show it as a failed
    /// generation instead of refusing to start.
    pub fn new(config: &Config) -> Result<Self> {
        let client = match &config.gemini_api_key {
            Some(api_key) => {
                // Explicit base URL avoids the BadScheme error from relative model paths
                let base_url = url::Url::parse(API_BASE)
                    .map_err(|e| AppError::config(format!("Invalid base URL: {}", e)))?;
                let model_url = format!("{}{}", API_BASE, config.model_path());

                let gemini = Gemini::with_model_and_base_url(api_key, model_url, base_url)
                    .map_err(|e| {
                        AppError::config(format!("Failed to create Gemini client: {}", e))
                    })?;
                Some(gemini)
            }
            None => None,
        };

        Ok(Self {
            client,
            model_name: config.model_name.clone(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[async_trait]
impl CaptionService for GeminiClient {
    async fn generate_caption(&self, file_names: &[String]) -> Result<String> {
        let client = self.client.as_ref().ok_or_else(|| {
            AppError::config("GEMINI_API_KEY (or API_KEY) must be set in environment or .env file")
        })?;

        if file_names.is_empty() {
            return Err(AppError::validation("no file names given"));
        }

        let prompt = build_caption_prompt(file_names);
        debug!(%prompt, "caption prompt");

        let message = Message {
            role: Role::User,
            content: Content {
                role: Some(Role::User),
                parts: Some(vec![Part::Text {
                    text: prompt,
                    thought: None,
                    thought_signature: None,
                }]),
            },
        };

        info!(model = %self.model_name, files = file_names.len(), "requesting share caption");
        let response = client
            .generate_content()
            .with_messages(vec![message])
            .execute()
            .await
            .map_err(|e| AppError::generation(format!("API request failed: {:?}", e)))?;

        response_text(&response)
    }
}

/// Joins the answer text of the first candidate, skipping thought parts.
///
/// Fails with [`AppError::EmptyResponse`] when there is no candidate or the
/// joined text is blank.
fn response_text(response: &GenerationResponse) -> Result<String> {
    let mut text = String::new();
    if let Some(candidate) = response.candidates.first() {
        if let Some(parts) = &candidate.content.parts {
            for part in parts {
                if let Part::Text { text: chunk, thought, .. } = part {
                    if thought.unwrap_or(false) {
                        continue;
                    }
                    text.push_str(chunk);
                }
            }
        }
    }

    clean_caption(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_is_a_configuration_error() {
        let config = Config::builder().build().unwrap();
        let client = GeminiClient::new(&config).unwrap();

        let err = client
            .generate_caption(&["a.jpg".to_string()])
            .await
            .unwrap_err();
        assert!(err.is_configuration());
    }

    fn response(json: serde_json::Value) -> GenerationResponse {
        serde_json::from_value(json).expect("valid GenerationResponse json")
    }

    #[test]
    fn no_candidates_is_empty_response() {
        let resp = response(serde_json::json!({ "candidates": [] }));
        assert!(matches!(response_text(&resp), Err(AppError::EmptyResponse)));
    }

    #[test]
    fn thought_only_answer_is_empty_response() {
        let resp = response(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "The names look like holiday photos.", "thought": true }]
                }
            }]
        }));
        assert!(matches!(response_text(&resp), Err(AppError::EmptyResponse)));
    }

    #[test]
    fn joins_text_parts_and_skips_thoughts() {
        let resp = response(serde_json::json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [
                            { "text": "Thinking about beaches...", "thought": true },
                            { "text": "  Sharing some sunny " },
                            { "text": "memories from our trip!\n" }
                        ]
                    }
                },
                {
                    "content": {
                        "role": "model",
                        "parts": [{ "text": "Second candidate is ignored." }]
                    }
                }
            ]
        }));
        assert_eq!(
            response_text(&resp).unwrap(),
            "Sharing some sunny memories from our trip!"
        );
    }

    #[test]
    fn keeps_configured_model_name() {
        let config = Config::builder()
            .with_api_key("test-key")
            .with_model("gemini-flash-latest")
            .build()
            .unwrap();
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(client.model_name(), "gemini-flash-latest");
    }
}
