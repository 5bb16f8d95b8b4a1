use crate::errors::AppError;
use crate::models::Solution;
use base64::Engine;
use std::path::Path;
use tokio::fs;

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Writes archive bytes to `path`, creating parent directories as needed.
pub async fn save_archive(bytes: &[u8], path: &Path) -> Result<(), AppError> {
    create_parent_dirs(path).await?;
    fs::write(path, bytes).await?;
    log::info!("Wrote archive {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Saves a solution as pretty-printed JSON.
pub async fn save_solution(solution: &Solution, path: &Path) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(solution)?;
    create_parent_dirs(path).await?;
    fs::write(path, json).await?;
    Ok(())
}

/// Loads a solution previously written by `save_solution`.
pub async fn load_solution(path: &Path) -> Result<Solution, AppError> {
    let json = fs::read_to_string(path).await?;
    let solution: Solution = serde_json::from_str(&json)?;
    Ok(solution)
}

/// Decodes a PNG data URI and writes the image to `path`.
pub async fn save_preview(data_uri: &str, path: &Path) -> Result<(), AppError> {
    let encoded = data_uri.strip_prefix(DATA_URI_PREFIX).ok_or_else(|| {
        AppError::InvalidInput("Preview image is not a base64 PNG data URI".to_string())
    })?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| AppError::InvalidInput(format!("Preview image is not valid base64: {}", e)))?;

    create_parent_dirs(path).await?;
    fs::write(path, bytes).await?;
    Ok(())
}

/// Wraps raw base64 PNG bytes as a data URI.
pub fn png_data_uri(base64_data: &str) -> String {
    format!("{}{}", DATA_URI_PREFIX, base64_data)
}

async fn create_parent_dirs(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}
