use super::extractor::scan_fences;

/// One piece of a Markdown document, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownSegment {
    FileBlock(FileBlock),
    Prose(Vec<ProseLine>),
}

/// A fenced file block ready for display.
///
/// `code` is the trimmed body, which is also what gets copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlock {
    pub path: String,
    pub language: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProseLine {
    Heading { level: u8, text: String },
    ListItem(String),
    Paragraph(Vec<InlineSpan>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Text(String),
    Code(String),
}

/// Splits `markdown` into prose and file-block segments.
///
/// Prose that contains no visible lines is dropped, so two adjacent blocks
/// produce two adjacent `FileBlock` segments.
pub fn render_segments(markdown: &str) -> Vec<MarkdownSegment> {
    let mut segments = Vec::new();
    let mut prose_start = 0;

    for fence in scan_fences(markdown) {
        push_prose(&mut segments, &markdown[prose_start..fence.span.start]);
        segments.push(MarkdownSegment::FileBlock(FileBlock {
            path: markdown[fence.path].to_string(),
            language: markdown[fence.language].to_string(),
            code: markdown[fence.body].trim().to_string(),
        }));
        prose_start = fence.span.end;
    }
    push_prose(&mut segments, &markdown[prose_start..]);

    segments
}

fn push_prose(segments: &mut Vec<MarkdownSegment>, text: &str) {
    let lines: Vec<ProseLine> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify_line)
        .collect();

    if !lines.is_empty() {
        segments.push(MarkdownSegment::Prose(lines));
    }
}

/// Classifies a single trimmed line by its prefix.
pub fn classify_line(line: &str) -> ProseLine {
    if let Some(text) = line.strip_prefix("# ") {
        return ProseLine::Heading { level: 1, text: text.to_string() };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return ProseLine::Heading { level: 2, text: text.to_string() };
    }
    if let Some(text) = line.strip_prefix("### ") {
        return ProseLine::Heading { level: 3, text: text.to_string() };
    }
    if let Some(text) = line.strip_prefix("* ").or_else(|| line.strip_prefix("- ")) {
        return ProseLine::ListItem(text.to_string());
    }
    ProseLine::Paragraph(split_inline_code(line))
}

/// Splits a line on single-backtick code spans.
///
/// Empty spans (two adjacent backticks) and unmatched backticks stay as text.
pub fn split_inline_code(line: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut rest = line;

    while let Some(open) = rest.find('`') {
        let after = &rest[open + 1..];
        match after.find('`') {
            Some(0) => {
                text.push_str(&rest[..=open]);
                rest = after;
            }
            Some(close) => {
                text.push_str(&rest[..open]);
                if !text.is_empty() {
                    spans.push(InlineSpan::Text(std::mem::take(&mut text)));
                }
                spans.push(InlineSpan::Code(after[..close].to_string()));
                rest = &after[close + 1..];
            }
            None => break,
        }
    }

    text.push_str(rest);
    if !text.is_empty() {
        spans.push(InlineSpan::Text(text));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> InlineSpan {
        InlineSpan::Text(s.to_string())
    }

    fn code(s: &str) -> InlineSpan {
        InlineSpan::Code(s.to_string())
    }

    #[test]
    fn test_prose_and_blocks_alternate() {
        let markdown = "# Backend\n\nRun it:\n```js:server.js\n  app.listen(3000)\n```\n- done";
        let segments = render_segments(markdown);
        assert_eq!(
            segments,
            vec![
                MarkdownSegment::Prose(vec![
                    ProseLine::Heading { level: 1, text: "Backend".to_string() },
                    ProseLine::Paragraph(vec![text("Run it:")]),
                ]),
                MarkdownSegment::FileBlock(FileBlock {
                    path: "server.js".to_string(),
                    language: "js".to_string(),
                    code: "app.listen(3000)".to_string(),
                }),
                MarkdownSegment::Prose(vec![ProseLine::ListItem("done".to_string())]),
            ]
        );
    }

    #[test]
    fn test_adjacent_blocks_skip_empty_prose() {
        let segments = render_segments("```a:a\n1\n```\n\n```b:b\n2\n```");
        assert_eq!(segments.len(), 2);
        assert!(segments
            .iter()
            .all(|s| matches!(s, MarkdownSegment::FileBlock(_))));
    }

    #[test]
    fn test_plain_fence_stays_prose() {
        let segments = render_segments("```sh\nnpm install\n```");
        assert_eq!(segments.len(), 1);
        assert!(matches!(segments[0], MarkdownSegment::Prose(_)));
    }

    #[test]
    fn test_line_classification() {
        assert_eq!(
            classify_line("## Setup"),
            ProseLine::Heading { level: 2, text: "Setup".to_string() }
        );
        assert_eq!(
            classify_line("### Notes"),
            ProseLine::Heading { level: 3, text: "Notes".to_string() }
        );
        assert_eq!(classify_line("* one"), ProseLine::ListItem("one".to_string()));
        assert_eq!(classify_line("- two"), ProseLine::ListItem("two".to_string()));
        assert_eq!(
            classify_line("#### deep"),
            ProseLine::Paragraph(vec![text("#### deep")])
        );
        assert_eq!(
            classify_line("-no space"),
            ProseLine::Paragraph(vec![text("-no space")])
        );
    }

    #[test]
    fn test_inline_code_spans() {
        assert_eq!(
            split_inline_code("Run `npm install` then `npm start`."),
            vec![
                text("Run "),
                code("npm install"),
                text(" then "),
                code("npm start"),
                text("."),
            ]
        );
    }

    #[test]
    fn test_unmatched_and_empty_backticks() {
        assert_eq!(split_inline_code("a ` b"), vec![text("a ` b")]);
        assert_eq!(split_inline_code("``x`"), vec![text("`"), code("x")]);
        assert_eq!(split_inline_code("``"), vec![text("``")]);
    }

    #[test]
    fn test_markup_passes_through() {
        assert_eq!(
            split_inline_code("<b>bold</b>"),
            vec![text("<b>bold</b>")]
        );
    }
}
