use super::extractor::extract_files;
use crate::errors::AppError;
use crate::models::Solution;
use indexmap::IndexMap;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

pub const README_ENTRY: &str = "README.md";
pub const INSTRUCTIONS_ENTRY: &str = "INSTRUCTIONS.md";

/// Lists the archive entries for a solution, in write order.
///
/// Docs come first, then backend files, then frontend files. Empty docs are
/// skipped, the same as an absent tab. Writing a path
/// twice replaces the earlier content but keeps its original position.
pub fn archive_entries(solution: &Solution) -> IndexMap<String, String> {
    let mut entries = IndexMap::new();

    let docs = [
        (README_ENTRY, &solution.overview),
        (INSTRUCTIONS_ENTRY, &solution.instructions),
    ];
    for (name, content) in docs {
        if let Some(content) = content.as_deref().filter(|c| !c.is_empty()) {
            entries.insert(name.to_string(), content.to_string());
        }
    }

    for markdown in [&solution.backend, &solution.frontend].into_iter().flatten() {
        for file in extract_files(markdown) {
            if entries.insert(file.path.clone(), file.code).is_some() {
                log::debug!("Archive entry {} overwritten by a later block", file.path);
            }
        }
    }

    entries
}

/// Builds a ZIP archive for a solution. The preview image is not packaged.
pub fn build_archive(solution: &Solution) -> Result<Vec<u8>, AppError> {
    let entries = archive_entries(solution);
    log::debug!("Packaging {} archive entries", entries.len());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, content) in &entries {
        zip.start_file(path.as_str(), options.clone())?;
        zip.write_all(content.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}
