//! Clipboard copy for generated file blocks.

use crate::errors::AppError;
use crate::file_processing::renderer::{render_segments, FileBlock, MarkdownSegment};
use crate::models::Solution;
use arboard::Clipboard;

/// Finds the block declared at `path`, the same one the archive would keep.
pub fn find_file_block(markdowns: &[&str], path: &str) -> Option<FileBlock> {
    markdowns
        .iter()
        .flat_map(|markdown| render_segments(markdown))
        .filter_map(|segment| match segment {
            MarkdownSegment::FileBlock(block) if block.path == path => Some(block),
            _ => None,
        })
        .last()
}

/// Finds a block across the backend and frontend of a solution.
pub fn find_solution_block(solution: &Solution, path: &str) -> Option<FileBlock> {
    let markdowns: Vec<&str> = [&solution.backend, &solution.frontend]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();
    find_file_block(&markdowns, path)
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| AppError::ClipboardError(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| AppError::ClipboardError(format!("Failed to copy to clipboard: {}", e)))
}

/// Copies the trimmed code of the block at `path`.
pub fn copy_block(markdowns: &[&str], path: &str) -> Result<FileBlock, AppError> {
    copy_found(find_file_block(markdowns, path), path)
}

/// Copies the trimmed code of the block at `path` in a solution.
pub fn copy_solution_block(solution: &Solution, path: &str) -> Result<FileBlock, AppError> {
    copy_found(find_solution_block(solution, path), path)
}

fn copy_found(block: Option<FileBlock>, path: &str) -> Result<FileBlock, AppError> {
    let block =
        block.ok_or_else(|| AppError::InvalidInput(format!("No file block at path '{}'", path)))?;
    copy_to_clipboard(&block.code)?;
    log::info!("Copied {} ({} bytes) to clipboard", block.path, block.code.len());
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_code_is_trimmed() {
        let markdown = "Setup:\n```js:server.js\n\n  app.listen(3000)\n\n```";
        let block = find_file_block(&[markdown], "server.js").unwrap();
        assert_eq!(block.code, "app.listen(3000)");
        assert_eq!(block.language, "js");
    }

    #[test]
    fn test_unknown_path_is_none() {
        let markdown = "```js:server.js\nx\n```";
        assert_eq!(find_file_block(&[markdown], "client.js"), None);
        assert_eq!(find_file_block(&[], "server.js"), None);
    }

    #[test]
    fn test_frontend_block_wins_like_archive() {
        let solution = Solution {
            backend: Some("```json:shared/config.json\n{\"side\": \"backend\"}\n```".to_string()),
            frontend: Some("```json:shared/config.json\n{\"side\": \"frontend\"}\n```".to_string()),
            ..Default::default()
        };
        let block = find_solution_block(&solution, "shared/config.json").unwrap();
        assert_eq!(block.code, "{\"side\": \"frontend\"}");
    }

    #[test]
    fn test_copy_of_missing_block_fails_before_clipboard() {
        let result = copy_block(&["no blocks here"], "a.js");
        assert!(matches!(result, Err(AppError::InvalidInput(_))));

        let result = copy_solution_block(&Solution::default(), "a.js");
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
