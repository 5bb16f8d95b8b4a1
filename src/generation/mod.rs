use crate::api::config::{code_request, preview_prompt};
use crate::api::errors::ModelError;
use crate::api::GenerativeModel;
use crate::file_processing::writer::png_data_uri;
use crate::models::payload::CodePayload;
use crate::models::{GenerationType, Solution};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Error generating solution: {0}")]
    Model(#[from] ModelError),
    #[error("Error generating solution: malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("Error generating solution: no response within {0:?}")]
    Timeout(Duration),
}

/// Both outbound calls after they have been joined.
///
/// The code result is mandatory. The image slot only ever holds a value or
/// nothing; image failures are already absorbed by the time this exists.
#[derive(Debug)]
pub struct JoinedOutcome {
    pub mandatory: Result<CodePayload, GenerationError>,
    pub optional: Option<String>,
}

/// Runs one generation request against a model.
pub struct Orchestrator<M> {
    model: M,
    timeout: Duration,
}

impl<M: GenerativeModel> Orchestrator<M> {
    pub fn new(model: M, timeout: Duration) -> Self {
        Self { model, timeout }
    }

    /// Generates a `Solution` for `prompt` in the given mode.
    ///
    /// The code call and, for visual modes, the preview image call run
    /// concurrently. Only a failure of the code call fails the request.
    pub async fn generate(
        &self,
        prompt: &str,
        mode: GenerationType,
    ) -> Result<Solution, GenerationError> {
        log::debug!("Generating {} solution", mode);

        let (mandatory, optional) =
            tokio::join!(self.generate_code(prompt, mode), self.generate_preview(prompt, mode));
        let outcome = JoinedOutcome { mandatory, optional };

        let payload = outcome.mandatory.inspect_err(|e| log::error!("{}", e))?;
        Ok(payload.into_solution(outcome.optional))
    }

    async fn generate_code(
        &self,
        prompt: &str,
        mode: GenerationType,
    ) -> Result<CodePayload, GenerationError> {
        let request = code_request(prompt, mode);
        let text = self.with_timeout(self.model.generate_code(&request)).await??;
        CodePayload::parse(mode, &text).map_err(GenerationError::MalformedResponse)
    }

    async fn generate_preview(&self, prompt: &str, mode: GenerationType) -> Option<String> {
        if !mode.wants_preview() {
            return None;
        }

        let image_prompt = preview_prompt(prompt);
        match self.with_timeout(self.model.generate_image(&image_prompt)).await {
            Ok(Ok(Some(data))) => Some(png_data_uri(&data)),
            Ok(Ok(None)) => {
                log::warn!("Image model returned no preview image");
                None
            }
            Ok(Err(e)) => {
                log::warn!("Error generating preview image: {}", e);
                None
            }
            Err(_) => {
                log::warn!("Preview image timed out after {:?}", self.timeout);
                None
            }
        }
    }

    async fn with_timeout<F: Future>(&self, future: F) -> Result<F::Output, GenerationError> {
        timeout(self.timeout, future)
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout))
    }
}
