use crate::file_processing::renderer::{
    render_segments, FileBlock, InlineSpan, MarkdownSegment, ProseLine,
};
use crate::models::{ExtractedFile, Solution, Tab};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Manages CLI display and output formatting.
pub struct CliDisplayManager {
    spinner: Option<ProgressBar>,
}

impl CliDisplayManager {
    /// Creates a new `CliDisplayManager`.
    pub fn new() -> Self {
        CliDisplayManager { spinner: None }
    }

    /// Prints the application header.
    pub fn print_header(&self) {
        println!("\n{}", "╭───────────────────────────╮".bright_magenta());
        println!(
            "{}",
            format!("│  🧩 Full-Stack Buddy {:<5}│", env!("CARGO_PKG_VERSION"))
                .bright_magenta()
                .bold()
        );
        println!("{}\n", "╰───────────────────────────╯".bright_magenta());
    }

    pub fn print_generation_start(&self, mode: &str) {
        self.print_section(
            "⚓",
            "[1/3] Querying Gemini API",
            &format!("Generating a {} solution", mode),
        );
    }

    pub fn print_generation_success(&self, solution: &Solution) {
        self.print_info("Successfully received solution");
        if solution.preview_image.is_none() && solution.frontend.is_some() {
            self.print_info("No preview image could be generated");
        }
    }

    pub fn print_rendering_start(&self) {
        self.print_section("📄", "[2/3] Rendering Solution", "");
    }

    pub fn print_packaging_start(&self) {
        self.print_section("💾", "[3/3] Packaging Files", "");
    }

    pub fn print_saved(&self, what: &str, path: &Path) {
        self.print_info(&format!("Saved {} to '{}'", what, path.display()));
    }

    pub fn print_copied(&self, path: &str) {
        self.print_info(&format!(
            "Copied '{}' to the clipboard",
            sanitize_for_terminal(path)
        ));
    }

    pub fn print_tab_fallback(&self, requested: Tab, shown: Option<Tab>) {
        let message = match shown {
            Some(tab) => format!(
                "Tab '{}' is not available, showing '{}'",
                requested.label(),
                tab.label()
            ),
            None => format!("Tab '{}' is not available", requested.label()),
        };
        println!("   {} {}", "!".bright_yellow(), message.italic().yellow());
    }

    /// Prints the tab bar, highlighting the active tab.
    pub fn print_tabs(&self, tabs: &[Tab], active: Option<Tab>) {
        let labels: Vec<String> = tabs
            .iter()
            .map(|&tab| {
                if Some(tab) == active {
                    format!("[{}]", tab.label()).bright_cyan().bold().to_string()
                } else {
                    tab.label().bright_white().dimmed().to_string()
                }
            })
            .collect();
        println!("   {}", labels.join("  "));
        println!();
    }

    /// Prints the contents of one tab of a solution.
    pub fn print_tab(&self, solution: &Solution, tab: Tab) {
        println!("{}", format!("── {} ──", tab.label()).bright_cyan().bold());
        match tab {
            Tab::Preview => self.print_preview(solution),
            _ => self.print_markdown(solution.markdown_for(tab).unwrap_or_default()),
        }
        println!();
    }

    fn print_preview(&self, solution: &Solution) {
        match &solution.preview_image {
            Some(uri) => self.print_info(&format!(
                "Preview image available ({} bytes encoded), save it with --save-preview",
                uri.len()
            )),
            None => {
                println!("   {}", "Preview Not Available".bold());
                self.print_info("An image preview could not be generated for this request.");
            }
        }
    }

    /// Renders Markdown to the terminal.
    pub fn print_markdown(&self, markdown: &str) {
        for segment in render_segments(markdown) {
            match segment {
                MarkdownSegment::FileBlock(block) => self.print_file_block(&block),
                MarkdownSegment::Prose(lines) => lines.iter().for_each(|l| self.print_prose(l)),
            }
        }
    }

    /// Prints only the raw code of each file block, for piping or copying.
    pub fn print_markdown_raw(&self, markdown: &str) {
        for segment in render_segments(markdown) {
            if let MarkdownSegment::FileBlock(block) = segment {
                println!("{}", sanitize_for_terminal(&block.code));
            }
        }
    }

    fn print_file_block(&self, block: &FileBlock) {
        let path = sanitize_for_terminal(&block.path);
        let language = sanitize_for_terminal(&block.language);
        println!();
        println!(
            "  {} {}",
            path.bright_white().bold(),
            language.bright_black()
        );
        println!("  {}", "─".repeat(40).bright_black());
        for line in sanitize_for_terminal(&block.code).lines() {
            println!("  {} {}", "│".bright_black(), line);
        }
        println!();
    }

    fn print_prose(&self, line: &ProseLine) {
        match line {
            ProseLine::Heading { level, text } => {
                let text = sanitize_for_terminal(text);
                match level {
                    1 => println!("\n{}", text.bright_cyan().bold().underline()),
                    2 => println!("\n{}", text.bright_cyan().bold()),
                    _ => println!("{}", text.bold()),
                }
            }
            ProseLine::ListItem(text) => {
                println!("  {} {}", "•".bright_yellow(), sanitize_for_terminal(text))
            }
            ProseLine::Paragraph(spans) => {
                let line: String = spans
                    .iter()
                    .map(|span| match span {
                        InlineSpan::Text(text) => sanitize_for_terminal(text),
                        InlineSpan::Code(code) => {
                            sanitize_for_terminal(code).bright_cyan().to_string()
                        }
                    })
                    .collect();
                println!("{}", line);
            }
        }
    }

    /// Lists extracted files with their sizes.
    pub fn print_file_list(&self, files: &[ExtractedFile]) {
        if files.is_empty() {
            self.print_info("No file blocks found");
            return;
        }
        for file in files {
            println!(
                "   {} {} {}",
                sanitize_for_terminal(&file.path).bright_white(),
                sanitize_for_terminal(&file.language).bright_black(),
                format!("({} bytes)", file.code.len()).dimmed()
            );
        }
    }

    /// Prints the single user-facing error banner.
    pub fn print_error(&self, message: &str) {
        eprintln!();
        eprintln!(
            "{} {}",
            "An error occurred:".bright_red().bold(),
            sanitize_for_terminal(message).red()
        );
    }

    /// Prints the application footer.
    pub fn print_footer(&self, packaged_files: usize, duration: Duration) {
        println!();
        println!(
            "{}",
            format!("⚡ Packaged {} file(s)", packaged_files)
                .bright_white()
                .dimmed(),
        );
        println!(
            "{}",
            format!("⚡ Completed in {:.2?}", duration)
                .bright_white()
                .dimmed(),
        );
        println!();
    }

    /// Starts a spinner while waiting on the model.
    pub fn start_spinner(&mut self) {
        let spinner = ProgressBar::new_spinner();
        let template = format!(
            "   {} {{spinner}} {}",
            "→".bright_white(),
            "Waiting for Gemini response".italic().bright_white()
        );
        if let Ok(style) = ProgressStyle::with_template(&template) {
            spinner.set_style(
                style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
            );
        }
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Stops the spinner.
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Helper function to print a section header.
    fn print_section(&self, icon: &str, title: &str, description: &str) {
        println!("{} {}", icon.bright_yellow(), title.bright_cyan().bold());
        if !description.is_empty() {
            println!(
                "   {} {}",
                "→".bright_white(),
                description.italic().bright_white()
            );
        }
    }

    /// Helper function to print an informational message.
    fn print_info(&self, message: &str) {
        println!(
            "   {} {}",
            "→".bright_white(),
            message.italic().bright_white()
        );
    }
}

/// Drops control characters other than newline and tab.
///
/// Model output is printed as-is otherwise, so this is what keeps escape
/// sequences in generated text from reaching the terminal.
pub fn sanitize_for_terminal(text: &str) -> String {
    text.chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .collect()
}
