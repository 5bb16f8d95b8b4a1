use crate::models::{GenerationType, Tab};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the Full-Stack Buddy application.
#[derive(Parser, Debug, PartialEq, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Description of the application to generate.
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// What to generate.
    #[arg(short, long, value_enum, default_value_t = GenerationType::Fullstack)]
    pub mode: GenerationType,

    /// Render only this tab instead of every tab.
    #[arg(short, long, value_enum)]
    pub tab: Option<Tab>,

    /// Skip writing the ZIP archive.
    #[arg(long)]
    pub no_zip: bool,

    /// Also save the solution as JSON.
    #[arg(long)]
    pub save_json: Option<PathBuf>,

    /// Save the preview image as a PNG, when one was generated.
    #[arg(long)]
    pub save_preview: Option<PathBuf>,

    /// Copy the code of the file block at this path to the clipboard.
    #[arg(short, long, value_name = "PATH")]
    pub copy: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for the Full-Stack Buddy application.
#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum Commands {
    /// Manage configuration options.
    Config {
        /// Set the log level (debug, info, warn, error).
        #[arg(long)]
        set_log_level: Option<String>,

        /// Set the output directory.
        #[arg(long)]
        set_output_directory: Option<String>,

        /// Set the archive file name.
        #[arg(long)]
        set_archive_name: Option<String>,

        /// Set the timeout in seconds for each model call.
        #[arg(long)]
        set_timeout: Option<u64>,
    },

    /// Manage model configuration options.
    ModelConfig {
        /// Set the API key for Gemini.
        #[arg(long)]
        set_api_key: Option<String>,

        /// Set the model used for code generation.
        #[arg(long)]
        set_code_model: Option<String>,

        /// Set the model used for preview images.
        #[arg(long)]
        set_image_model: Option<String>,
    },

    /// Build the ZIP archive for a saved solution.
    Package {
        /// Solution JSON written by --save-json.
        solution: PathBuf,

        /// Archive path (defaults to the configured output location).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a Markdown file to the terminal.
    Render {
        /// Markdown file to render.
        file: PathBuf,

        /// Print only the code of each file block.
        #[arg(long)]
        raw: bool,

        /// Copy the code of the file block at this path to the clipboard.
        #[arg(short, long, value_name = "PATH")]
        copy: Option<String>,
    },

    /// List the file blocks found in a Markdown file.
    Extract {
        /// Markdown file to scan.
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_fullstack() {
        let args = Args::parse_from(["buddy", "-p", "A todo list app"]);
        assert_eq!(args.prompt.as_deref(), Some("A todo list app"));
        assert_eq!(args.mode, GenerationType::Fullstack);
        assert!(!args.no_zip);
        assert_eq!(args.copy, None);
        assert_eq!(args.command, None);
    }

    #[test]
    fn test_copy_flag_on_generate_and_render() {
        let args = Args::parse_from(["buddy", "-p", "An API", "--copy", "src/server.js"]);
        assert_eq!(args.copy.as_deref(), Some("src/server.js"));

        let args = Args::parse_from(["buddy", "render", "backend.md", "-c", "server.js"]);
        assert_eq!(
            args.command,
            Some(Commands::Render {
                file: PathBuf::from("backend.md"),
                raw: false,
                copy: Some("server.js".to_string()),
            })
        );
    }

    #[test]
    fn test_mode_and_tab_flags() {
        let args = Args::parse_from([
            "buddy", "-p", "An API", "--mode", "backend", "--tab", "instructions", "--no-zip",
        ]);
        assert_eq!(args.mode, GenerationType::Backend);
        assert_eq!(args.tab, Some(Tab::Instructions));
        assert!(args.no_zip);
    }

    #[test]
    fn test_package_subcommand() {
        let args = Args::parse_from(["buddy", "package", "run.json", "-o", "app.zip"]);
        assert_eq!(
            args.command,
            Some(Commands::Package {
                solution: PathBuf::from("run.json"),
                output: Some(PathBuf::from("app.zip")),
            })
        );
    }
}
