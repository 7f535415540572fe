//! Advisory generator boundary
//!
//! External collaborator that expands a finding into free-form,
//! client-friendly guidance. The scanner treats it as a black-box text
//! service: whatever happens (missing credential, unreachable service,
//! malformed reply), a human-readable string comes back and the report
//! structure is unaffected.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Trait for advisory backends
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Expands a finding's title and evidence into client guidance.
    /// Never fails; errors degrade to a placeholder string.
    async fn generate(&self, title: &str, evidence: &str) -> String;

    /// Returns whether the backend is configured and usable
    fn is_available(&self) -> bool;
}

/// Advisor that is never configured; always answers with a placeholder
pub struct NullAdvisor;

#[async_trait]
impl Advisor for NullAdvisor {
    async fn generate(&self, _title: &str, _evidence: &str) -> String {
        "Advisory service not configured.".to_string()
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Advisor backed by an OpenAI-compatible chat-completions endpoint
pub struct ChatAdvisor {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl ChatAdvisor {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Creates an advisor against the default endpoint, reading the API
    /// key from the `GROQ_API_KEY` environment variable
    pub fn from_env() -> Self {
        Self::new(
            DEFAULT_ENDPOINT,
            DEFAULT_MODEL,
            std::env::var("GROQ_API_KEY").ok(),
        )
    }
}

#[async_trait]
impl Advisor for ChatAdvisor {
    async fn generate(&self, title: &str, evidence: &str) -> String {
        let Some(ref key) = self.api_key else {
            return "Advisory service not configured: set GROQ_API_KEY to enable \
                    expanded guidance."
                .to_string();
        };

        let prompt = format!(
            "Explain the following website security issue in simple language \
             for a non-technical client.\n\n\
             Issue Title: {title}\n\
             Evidence: {evidence}\n\n\
             Cover: a two-line client summary, why this is risky, three \
             recommended actions, a priority (High/Medium/Low), and an \
             estimated fix time."
        );

        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You generate client-friendly security mitigation guidance."
                },
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.2,
            "max_tokens": 500
        });

        debug!("Requesting advisory for '{title}' from {}", self.endpoint);

        let response = match self
            .client
            .post(&self.endpoint)
            .bearer_auth(key)
            .json(&body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("Advisory request failed: {e}");
                return format!("Advisory service unavailable: {e}");
            }
        };

        match response.json::<ChatResponse>().await {
            Ok(parsed) => parsed
                .choices
                .into_iter()
                .next()
                .map(|c| c.message.content.trim().to_string())
                .unwrap_or_else(|| "Advisory service returned no content.".to_string()),
            Err(e) => {
                warn!("Advisory response malformed: {e}");
                format!("Advisory service returned an unreadable reply: {e}")
            }
        }
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_advisor_placeholder() {
        let advisor = NullAdvisor;
        assert!(!advisor.is_available());
        let text = advisor.generate("CORS Misconfiguration", "ACAO: *").await;
        assert!(!text.is_empty());
    }

    #[tokio::test]
    async fn test_chat_advisor_without_key_degrades() {
        let advisor = ChatAdvisor::new("http://127.0.0.1:1/v1/chat", "test-model", None);
        assert!(!advisor.is_available());
        let text = advisor.generate("Sensitive Files Exposed", "/.env").await;
        assert!(text.contains("not configured"));
    }

    #[tokio::test]
    async fn test_chat_advisor_unreachable_endpoint_degrades() {
        let advisor = ChatAdvisor::new(
            "http://127.0.0.1:1/v1/chat",
            "test-model",
            Some("key".to_string()),
        );
        assert!(advisor.is_available());
        let text = advisor.generate("CORS Misconfiguration", "ACAO: *").await;
        assert!(text.contains("unavailable"));
    }
}
