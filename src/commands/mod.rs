use crate::cli::clipboard;
use crate::cli::display::CliDisplayManager;
use crate::errors::AppError;
use crate::file_processing::{extractor, packager, writer};
use crate::utils::config::{read_config, validate_config, write_config};
use std::path::PathBuf;
use tokio::fs;

/// Handles the config subcommand
pub async fn handle_config_subcommand(
    set_log_level: Option<String>,
    set_output_directory: Option<String>,
    set_archive_name: Option<String>,
    set_timeout: Option<u64>,
) -> Result<(), AppError> {
    let mut config = read_config()?;

    if let Some(log_level) = set_log_level {
        config.log_level = log_level.clone();
        println!("Log level set to {}", log_level);
    }

    if let Some(output_directory) = set_output_directory {
        config.output_directory = output_directory.clone();
        println!("Output directory set to {}", output_directory);
    }

    if let Some(archive_name) = set_archive_name {
        config.archive_name = archive_name.clone();
        println!("Archive name set to {}", archive_name);
    }

    if let Some(timeout) = set_timeout {
        config.timeout_secs = timeout;
        println!("Timeout set to {}s", timeout);
    }

    validate_config(&config)?;
    write_config(&config)?;
    Ok(())
}

/// Handles the model-config subcommand
pub async fn handle_model_config_subcommand(
    set_api_key: Option<String>,
    set_code_model: Option<String>,
    set_image_model: Option<String>,
) -> Result<(), AppError> {
    let mut config = read_config()?;

    if let Some(api_key) = set_api_key {
        config.api_key = Some(api_key);
        println!("API key set");
    }

    if let Some(code_model) = set_code_model {
        config.code_model = code_model.clone();
        println!("Code model set to: {}", code_model);
    }

    if let Some(image_model) = set_image_model {
        config.image_model = image_model.clone();
        println!("Image model set to: {}", image_model);
    }

    validate_config(&config)?;
    write_config(&config)?;
    Ok(())
}

/// Handles the package subcommand
pub async fn handle_package_subcommand(
    solution_path: PathBuf,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let display_manager = CliDisplayManager::new();
    let solution = writer::load_solution(&solution_path).await?;

    let archive_path = match output {
        Some(path) => path,
        None => read_config()?.archive_path(),
    };

    let bytes = packager::build_archive(&solution)?;
    writer::save_archive(&bytes, &archive_path).await?;
    display_manager.print_saved("archive", &archive_path);
    Ok(())
}

/// Handles the render subcommand
pub async fn handle_render_subcommand(
    file: PathBuf,
    raw: bool,
    copy: Option<String>,
) -> Result<(), AppError> {
    let display_manager = CliDisplayManager::new();
    let markdown = fs::read_to_string(&file).await?;

    if raw {
        display_manager.print_markdown_raw(&markdown);
    } else {
        display_manager.print_markdown(&markdown);
    }

    if let Some(path) = copy {
        let block = clipboard::copy_block(&[&markdown], &path)?;
        display_manager.print_copied(&block.path);
    }
    Ok(())
}

/// Handles the extract subcommand
pub async fn handle_extract_subcommand(file: PathBuf) -> Result<(), AppError> {
    let display_manager = CliDisplayManager::new();
    let markdown = fs::read_to_string(&file).await?;

    let files = extractor::extract_files(&markdown);
    log::debug!("Found {} file blocks in {}", files.len(), file.display());
    display_manager.print_file_list(&files);
    Ok(())
}
