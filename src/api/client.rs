// src/api/client.rs

use super::{config, errors::ModelError, CodeRequest, GenerativeModel};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

/// API client for interacting with the Gemini API.
pub struct GeminiApi {
    client: Client,
    api_key: String,
    base_url: String,
    code_model: String,
    image_model: String,
}

impl GeminiApi {
    /// Creates a new `GeminiApi` instance.
    pub fn new(api_key: String, code_model: String, image_model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: config::BASE_URL.to_string(),
            code_model,
            image_model,
        }
    }

    /// Sends a `generateContent` request and returns the first candidate's parts.
    async fn send_request(&self, model: &str, body: Value) -> Result<Vec<Value>, ModelError> {
        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(ModelError::ApiError(error_text));
        }

        let raw_response = response.text().await?;
        let json_response: Value = serde_json::from_str(&raw_response)?;
        candidate_parts(&json_response)
    }
}

#[async_trait]
impl GenerativeModel for GeminiApi {
    async fn generate_code(&self, request: &CodeRequest) -> Result<String, ModelError> {
        log::debug!("Calling {} for code generation", self.code_model);

        let body = json!({
            "systemInstruction": { "parts": [{ "text": request.system_instruction }] },
            "contents": [{ "role": "user", "parts": [{ "text": request.prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.schema,
            },
        });

        let parts = self.send_request(&self.code_model, body).await?;
        let text = joined_text(&parts).ok_or(ModelError::EmptyResponse)?;

        log::info!("Code response received ({} bytes)", text.len());
        Ok(text)
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, ModelError> {
        log::debug!("Calling {} for preview image", self.image_model);

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseModalities": ["IMAGE"] },
        });

        let parts = self.send_request(&self.image_model, body).await?;
        Ok(first_inline_data(&parts))
    }
}

fn candidate_parts(json_response: &Value) -> Result<Vec<Value>, ModelError> {
    if let Some(error) = json_response.get("error") {
        return Err(ModelError::ApiError(error.to_string()));
    }

    json_response["candidates"][0]["content"]["parts"]
        .as_array()
        .cloned()
        .ok_or(ModelError::EmptyResponse)
}

/// Concatenated text of all text parts, if any.
fn joined_text(parts: &[Value]) -> Option<String> {
    let text: String = parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect();
    (!text.is_empty()).then_some(text)
}

fn first_inline_data(parts: &[Value]) -> Option<String> {
    parts
        .iter()
        .find_map(|part| part["inlineData"]["data"].as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_parts_are_joined() {
        let response = json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"code\":" }, { "text": "\"x\"}" }] } }]
        });
        let parts = candidate_parts(&response).unwrap();
        assert_eq!(joined_text(&parts).as_deref(), Some("{\"code\":\"x\"}"));
    }

    #[test]
    fn test_error_object_is_reported() {
        let response = json!({ "error": { "code": 403, "message": "denied" } });
        assert!(matches!(
            candidate_parts(&response),
            Err(ModelError::ApiError(_))
        ));
    }

    #[test]
    fn test_missing_candidates_is_empty_response() {
        assert!(matches!(
            candidate_parts(&json!({ "candidates": [] })),
            Err(ModelError::EmptyResponse)
        ));
    }

    #[test]
    fn test_inline_image_is_found_after_text() {
        let parts = vec![
            json!({ "text": "Here is your image" }),
            json!({ "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }),
        ];
        assert_eq!(first_inline_data(&parts).as_deref(), Some("iVBORw0KGgo="));
        assert_eq!(first_inline_data(&parts[..1]), None);
    }
}
