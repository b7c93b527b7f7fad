use crate::actors::messages::AppError;
use crate::actors::traits::GenerativeClient;
use crate::brain::{Category, ChatResponse};
use crate::config::GenerativeConfig;
use async_trait::async_trait;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Serialize;
use std::sync::LazyLock;
use tokio::time::{sleep, timeout, Duration};
use tracing::{info, warn};
use url::Url;
use validator::Validate;

/// Instructions sent with every collaborator request.
pub const HEALTH_SYSTEM_PROMPT: &str = "You are a professional healthcare AI assistant with extensive medical knowledge. Your role is to:

1. Analyze symptoms and provide helpful guidance
2. Answer wellness questions about sleep, diet, exercise, hydration
3. Provide medication information and first aid guidance
4. Detect emergency situations and recommend immediate medical attention

IMPORTANT GUIDELINES:
- Always emphasize that you're not a replacement for professional medical advice
- For emergency symptoms (chest pain, difficulty breathing, severe bleeding, loss of consciousness), immediately recommend calling emergency services
- Provide clear, actionable advice while being empathetic
- Ask relevant follow-up questions to better understand the situation
- Use a caring, professional tone
- Structure responses with clear sections when appropriate

Response format should be conversational and helpful, not robotic.";

// --- Constants ---
const RETRY_DELAY: Duration = Duration::from_millis(250);
const MAX_FOLLOW_UPS: usize = 3;

const EMERGENCY_KEYWORDS: &[&str] = &["emergency", "call 911", "immediate", "urgent", "hospital", "ambulance"];
const SYMPTOM_KEYWORDS: &[&str] = &["pain", "hurt", "ache", "symptom", "feel", "sick", "fever"];
const WELLNESS_KEYWORDS: &[&str] = &["sleep", "diet", "exercise", "water", "healthy", "wellness", "nutrition"];

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_prompt: Option<&'a str>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

/// `reqwest` client for a `/completion` style text-generation endpoint.
#[derive(Clone)]
pub struct HttpGenerativeClient {
    client: Client,
    url: Url,
    config: GenerativeConfig,
}

impl HttpGenerativeClient {
    pub fn new(config: GenerativeConfig) -> Result<Self, AppError> {
        config.validate()?;
        let url = config.completion_url()?;
        info!(url = %url, model = %config.model, "Generative collaborator configured");
        Ok(Self {
            client: Client::new(),
            url,
            config,
        })
    }

    pub fn config(&self) -> &GenerativeConfig {
        &self.config
    }

    fn build_request(&self, payload: &CompletionRequest<'_>) -> Result<reqwest::RequestBuilder, AppError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.config.auth_token {
            let auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| AppError::Config(format!("Invalid auth token: {}", e)))?;
            headers.insert(AUTHORIZATION, auth_value);
        }

        Ok(self.client.post(self.url.clone()).headers(headers).json(payload))
    }

    async fn attempt(&self, payload: &CompletionRequest<'_>) -> Result<String, AppError> {
        let res = self.build_request(payload)?.send().await?;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Collaborator(format!(
                "Completion request failed with status {}: {}",
                status, body
            )));
        }

        let json: serde_json::Value = res.json().await?;
        match json["content"].as_str() {
            Some(content) if !content.trim().is_empty() => Ok(content.trim().to_string()),
            _ => Err(AppError::Collaborator("Completion response has no content".to_string())),
        }
    }
}

#[async_trait]
impl GenerativeClient for HttpGenerativeClient {
    async fn generate(&self, prompt: String, system_prompt: Option<String>) -> Result<String, AppError> {
        let payload = CompletionRequest {
            model: &self.config.model,
            prompt: &prompt,
            system_prompt: system_prompt.as_deref(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            stream: false,
        };

        let attempts = self.config.max_retries + 1;
        let mut last_error = AppError::Collaborator("No attempt made".to_string());

        for attempt in 1..=attempts {
            let outcome = match timeout(self.config.timeout(), self.attempt(&payload)).await {
                Ok(result) => result,
                Err(elapsed) => Err(elapsed.into()),
            };
            match outcome {
                Ok(text) => return Ok(text),
                Err(e) => {
                    warn!(attempt, attempts, error = %e, "Generation attempt failed");
                    last_error = e;
                }
            }
            if attempt < attempts {
                sleep(RETRY_DELAY).await;
            }
        }

        Err(last_error)
    }
}

/// Category for generated text: emergency wording in the reply wins, then
/// wellness or symptom wording in the user's message.
pub fn classify_generated(user_message: &str, generated: &str) -> Category {
    let message = user_message.to_lowercase();
    let reply = generated.to_lowercase();

    if EMERGENCY_KEYWORDS.iter().any(|k| reply.contains(k)) {
        Category::Emergency
    } else if WELLNESS_KEYWORDS.iter().any(|k| message.contains(k)) {
        Category::Health
    } else if SYMPTOM_KEYWORDS.iter().any(|k| message.contains(k)) {
        Category::Symptom
    } else {
        Category::Health
    }
}

/// Heuristic score: 0.7, plus 0.1 each for length, concrete advice and a question. Capped at 0.95.
pub fn generated_confidence(generated: &str) -> f32 {
    let mut confidence: f32 = 0.7;
    if generated.chars().count() > 200 {
        confidence += 0.1;
    }
    if generated.contains("recommend") || generated.contains("suggest") {
        confidence += 0.1;
    }
    if generated.contains('?') {
        confidence += 0.1;
    }
    confidence.min(0.95)
}

static QUESTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]*\?").expect("Invalid regex: question"));

/// Up to three questions of reasonable length from generated text.
pub fn extract_follow_up_questions(generated: &str) -> Vec<String> {
    QUESTION_PATTERN
        .find_iter(generated)
        .map(|m| m.as_str().trim().to_string())
        .filter(|q| {
            let len = q.chars().count();
            len > 10 && len < 100
        })
        .take(MAX_FOLLOW_UPS)
        .collect()
}

/// Wraps generated text in a response variant.
///
/// Generated text carries no severity, so everything but an emergency
/// is presented as general health guidance.
pub fn generated_response(user_message: &str, generated: String) -> ChatResponse {
    let confidence = generated_confidence(&generated);
    match classify_generated(user_message, &generated) {
        Category::Emergency => ChatResponse::Emergency {
            follow_up_questions: extract_follow_up_questions(&generated),
            text: generated,
            confidence,
            urgency_level: "URGENT - Seek immediate care".to_string(),
        },
        _ => ChatResponse::Health {
            text: generated,
            confidence,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, retries: u32) -> HttpGenerativeClient {
        let mut config = GenerativeConfig::new(server.uri());
        config.max_retries = retries;
        config.timeout_secs = 2;
        HttpGenerativeClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_generate_success() {
        // 1. Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completion"))
            .and(body_partial_json(json!({ "stream": false, "max_tokens": 800 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": "  Drink water.  " })))
            .mount(&mock_server)
            .await;

        // 2. Act
        let result = client_for(&mock_server, 0)
            .generate("Hello".to_string(), Some(HEALTH_SYSTEM_PROMPT.to_string()))
            .await;

        // 3. Assert
        assert_eq!(result.unwrap(), "Drink water.");
    }

    #[tokio::test]
    async fn test_generate_sends_bearer_token() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completion"))
            .and(header("authorization", "Bearer s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": "ok" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = GenerativeConfig::new(mock_server.uri());
        config.auth_token = Some("s3cret".to_string());
        let client = HttpGenerativeClient::new(config).unwrap();

        assert_eq!(client.generate("hi".to_string(), None).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_generate_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completion"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(2)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server, 1).generate("Hello".to_string(), None).await;

        match result {
            Err(AppError::Collaborator(msg)) => {
                assert!(msg.contains("status 500"));
                assert!(msg.contains("Internal Server Error"));
            }
            other => panic!("Expected AppError::Collaborator, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_empty_content_is_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completion"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": "" })))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server, 0).generate("Hello".to_string(), None).await;
        assert!(matches!(result, Err(AppError::Collaborator(_))));
    }

    #[tokio::test]
    async fn test_generate_times_out() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completion"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "content": "late" }))
                    .set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let mut config = GenerativeConfig::new(mock_server.uri());
        config.timeout_secs = 1;
        config.max_retries = 0;
        let client = HttpGenerativeClient::new(config).unwrap();

        let result = client.generate("Hello".to_string(), None).await;
        assert!(matches!(result, Err(AppError::Timeout(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GenerativeConfig::new("http://localhost:8080");
        config.model = String::new();
        assert!(HttpGenerativeClient::new(config).is_err());
    }

    #[test]
    fn test_classify_generated() {
        assert_eq!(classify_generated("my chest hurts", "Call 911 right away."), Category::Emergency);
        assert_eq!(classify_generated("how should I sleep", "Keep a schedule."), Category::Health);
        assert_eq!(classify_generated("I feel sick", "Rest and fluids."), Category::Symptom);
        assert_eq!(classify_generated("tell me about vitamins", "They help."), Category::Health);
    }

    #[test]
    fn test_generated_confidence() {
        assert!((generated_confidence("Short answer.") - 0.7).abs() < 1e-6);
        assert!((generated_confidence("I recommend rest.") - 0.8).abs() < 1e-6);
        let long = format!("{} I suggest fluids. Is it worse at night?", "x".repeat(200));
        assert!((generated_confidence(&long) - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_extract_follow_up_questions() {
        let text = "Rest well. How long have you had the fever? Ok? Do you have a cough as well? \
                    Are you drinking enough fluids? Is anyone else at home sick?";
        let questions = extract_follow_up_questions(text);
        assert_eq!(
            questions,
            vec![
                "How long have you had the fever?",
                "Do you have a cough as well?",
                "Are you drinking enough fluids?",
            ]
        );
    }

    #[test]
    fn test_generated_response_variants() {
        let response = generated_response("help", "This is urgent. Go to a hospital. Can you get there?".to_string());
        assert_eq!(response.category(), Category::Emergency);
        assert_eq!(response.follow_up_questions(), &["Can you get there?".to_string()]);

        let response = generated_response("I feel sick", "Rest and fluids.".to_string());
        assert_eq!(response.category(), Category::Health);
    }
}
