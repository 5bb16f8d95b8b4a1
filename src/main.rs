mod api;
mod cli;
mod commands;
mod errors;
mod file_processing;
mod generation;
mod models;
mod utils;

use crate::utils::logger;
use api::client::GeminiApi;
use clap::Parser;
use cli::args::{Args, Commands};
use cli::clipboard;
use cli::display::CliDisplayManager;
use errors::AppError;
use file_processing::{packager, writer};
use generation::Orchestrator;
use std::time::Instant;
use utils::config::read_config;

/// The main entry point of the application
#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        CliDisplayManager::new().print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    // Read config.toml
    let config = read_config()?;
    logger::setup_logger(&config);

    if let Some(command) = args.command.clone() {
        return handle_subcommand(command).await;
    }

    let start_time = Instant::now();

    // Ensure prompt is provided
    let prompt = args
        .prompt
        .clone()
        .filter(|p| !p.trim().is_empty())
        .ok_or(AppError::MissingPrompt)?;

    let api_key = config.resolve_api_key().ok_or(AppError::MissingApiKey)?;

    let mut display_manager = CliDisplayManager::new();
    display_manager.print_header();
    display_manager.print_generation_start(&args.mode.to_string());

    let gemini_api = GeminiApi::new(
        api_key,
        config.code_model.clone(),
        config.image_model.clone(),
    );
    let orchestrator = Orchestrator::new(gemini_api, config.timeout());

    display_manager.start_spinner();
    let result = orchestrator.generate(&prompt, args.mode).await;
    display_manager.stop_spinner();
    let solution = result?;

    display_manager.print_generation_success(&solution);

    // Render the requested tab, or every tab in order
    display_manager.print_rendering_start();
    let tabs = solution.available_tabs();
    let active = solution.select_tab(args.tab);
    if let Some(requested) = args.tab.filter(|tab| Some(*tab) != active) {
        log::warn!("Tab {:?} not available, showing {:?}", requested, active);
        display_manager.print_tab_fallback(requested, active);
    }
    display_manager.print_tabs(&tabs, active);
    match (args.tab, active) {
        (Some(_), Some(tab)) => display_manager.print_tab(&solution, tab),
        _ => {
            for &tab in &tabs {
                display_manager.print_tab(&solution, tab);
            }
        }
    }

    if let Some(path) = &args.copy {
        // A failed copy must not cost the archive
        match clipboard::copy_solution_block(&solution, path) {
            Ok(block) => display_manager.print_copied(&block.path),
            Err(e) => display_manager.print_error(&e.to_string()),
        }
    }

    display_manager.print_packaging_start();
    let mut packaged_files = 0;

    if !args.no_zip {
        packaged_files = packager::archive_entries(&solution).len();
        let bytes = packager::build_archive(&solution)?;
        let archive_path = config.archive_path();
        writer::save_archive(&bytes, &archive_path).await?;
        display_manager.print_saved("archive", &archive_path);
    }

    if let Some(path) = &args.save_json {
        writer::save_solution(&solution, path).await?;
        display_manager.print_saved("solution", path);
    }

    if let (Some(path), Some(uri)) = (&args.save_preview, &solution.preview_image) {
        writer::save_preview(uri, path).await?;
        display_manager.print_saved("preview image", path);
    }

    display_manager.print_footer(packaged_files, start_time.elapsed());

    Ok(())
}

async fn handle_subcommand(command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Config {
            set_log_level,
            set_output_directory,
            set_archive_name,
            set_timeout,
        } => {
            commands::handle_config_subcommand(
                set_log_level,
                set_output_directory,
                set_archive_name,
                set_timeout,
            )
            .await
        }
        Commands::ModelConfig {
            set_api_key,
            set_code_model,
            set_image_model,
        } => {
            commands::handle_model_config_subcommand(set_api_key, set_code_model, set_image_model)
                .await
        }
        Commands::Package { solution, output } => {
            commands::handle_package_subcommand(solution, output).await
        }
        Commands::Render { file, raw, copy } => {
            commands::handle_render_subcommand(file, raw, copy).await
        }
        Commands::Extract { file } => commands::handle_extract_subcommand(file).await,
    }
}
