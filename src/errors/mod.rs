use crate::generation::GenerationError;
use std::fmt;
use toml;

#[derive(Debug)]
pub enum AppError {
    IoError(std::io::Error),
    GenerationError(GenerationError),
    TomlError(toml::de::Error),
    JsonError(serde_json::Error),
    ArchiveError(zip::result::ZipError),
    ClipboardError(String),
    MissingPrompt,
    MissingApiKey,
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::IoError(e) => write!(f, "IO error: {}", e),
            AppError::GenerationError(e) => write!(f, "{}", e),
            AppError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            AppError::JsonError(e) => write!(f, "JSON error: {}", e),
            AppError::ArchiveError(e) => write!(f, "Archive error: {}", e),
            AppError::ClipboardError(e) => write!(f, "Clipboard error: {}", e),
            AppError::MissingPrompt => write!(f, "Prompt is required"),
            AppError::MissingApiKey => write!(
                f,
                "API key is required (set GEMINI_API_KEY or run `buddy model-config --set-api-key`)"
            ),
            AppError::InvalidInput(e) => write!(f, "Invalid input: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::TomlError(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonError(err)
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::ArchiveError(err)
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::GenerationError(err)
    }
}
