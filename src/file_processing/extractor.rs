use crate::models::ExtractedFile;
use std::ops::Range;

const FENCE: &str = "```";
const CLOSING_FENCE: &str = "\n```";

/// A fenced file block located in a Markdown string.
///
/// All ranges are byte offsets into the scanned string. `span` covers the
/// block from its opening fence through the closing backticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSpan {
    pub span: Range<usize>,
    pub language: Range<usize>,
    pub path: Range<usize>,
    pub body: Range<usize>,
}

/// Extracts every fenced file block from `markdown`, in source order.
///
/// A block opens with ```` ```<lang>:<path> ```` immediately followed by a
/// newline, and ends at the first later line that starts with three
/// backticks. Blocks that never close produce nothing.
pub fn extract_files(markdown: &str) -> Vec<ExtractedFile> {
    scan_fences(markdown)
        .into_iter()
        .map(|fence| ExtractedFile {
            path: markdown[fence.path].to_string(),
            language: markdown[fence.language].to_string(),
            code: markdown[fence.body].trim().to_string(),
        })
        .collect()
}

/// Locates all non-overlapping fenced file blocks, left to right.
pub fn scan_fences(markdown: &str) -> Vec<FenceSpan> {
    let mut fences = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = markdown[cursor..].find(FENCE) {
        let start = cursor + offset;
        match parse_fence_at(markdown, start) {
            Some(fence) => {
                cursor = fence.span.end;
                fences.push(fence);
            }
            // Four or more backticks can still open a block one byte later.
            None => cursor = start + 1,
        }
    }

    fences
}

/// Parses a complete block whose opening fence begins at `start`.
fn parse_fence_at(markdown: &str, start: usize) -> Option<FenceSpan> {
    let bytes = markdown.as_bytes();

    let lang_start = start + FENCE.len();
    let lang_end = scan_while(bytes, lang_start, is_word_byte);
    if bytes.get(lang_end) != Some(&b':') {
        return None;
    }

    let path_start = lang_end + 1;
    let path_end = scan_while(bytes, path_start, is_path_byte);
    if path_end == path_start || bytes.get(path_end) != Some(&b'\n') {
        return None;
    }

    let body_start = path_end + 1;
    let body_end = body_start + markdown[body_start..].find(CLOSING_FENCE)?;

    Some(FenceSpan {
        span: start..body_end + CLOSING_FENCE.len(),
        language: lang_start..lang_end,
        path: path_start..path_end,
        body: body_start..body_end,
    })
}

fn scan_while(bytes: &[u8], from: usize, accept: fn(u8) -> bool) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| !accept(b))
        .map_or(bytes.len(), |len| from + len)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_path_byte(b: u8) -> bool {
    is_word_byte(b) || b == b'.' || b == b'/'
}
