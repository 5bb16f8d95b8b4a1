pub mod client;
pub mod config;
pub mod errors;

use async_trait::async_trait;
use errors::ModelError;
use serde_json::Value;

/// A structured-output code generation request.
#[derive(Debug, Clone)]
pub struct CodeRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub schema: Value,
}

/// The external generative model.
///
/// `generate_code` returns the raw JSON text of the response. `generate_image`
/// returns base64 PNG data, or `None` when the model produced no image.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_code(&self, request: &CodeRequest) -> Result<String, ModelError>;

    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, ModelError>;
}
