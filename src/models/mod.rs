pub mod payload;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of an application the model is asked to produce.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GenerationType {
    Backend,
    Frontend,
    Fullstack,
}

impl GenerationType {
    /// Whether a preview image is requested alongside the code.
    pub fn wants_preview(self) -> bool {
        matches!(self, GenerationType::Frontend | GenerationType::Fullstack)
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationType::Backend => write!(f, "backend"),
            GenerationType::Frontend => write!(f, "frontend"),
            GenerationType::Fullstack => write!(f, "fullstack"),
        }
    }
}

/// The normalized result of one generation request.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
}

impl Solution {
    /// Tabs offered for this solution, in display order.
    ///
    /// `Preview` follows `Frontend` whenever a frontend is present, whether or
    /// not an image was actually produced.
    pub fn available_tabs(&self) -> Vec<Tab> {
        let mut tabs = Vec::new();
        if has_text(&self.overview) {
            tabs.push(Tab::Overview);
        }
        if has_text(&self.backend) {
            tabs.push(Tab::Backend);
        }
        if has_text(&self.frontend) {
            tabs.push(Tab::Frontend);
            tabs.push(Tab::Preview);
        }
        if has_text(&self.instructions) {
            tabs.push(Tab::Instructions);
        }
        tabs
    }

    /// The tab to show for a request, falling back to the first available
    /// tab when the requested one is missing. `None` only for an empty solution.
    pub fn select_tab(&self, requested: Option<Tab>) -> Option<Tab> {
        let tabs = self.available_tabs();
        match requested {
            Some(tab) if tabs.contains(&tab) => Some(tab),
            _ => tabs.first().copied(),
        }
    }

    /// Markdown content behind a tab. `Preview` has none.
    pub fn markdown_for(&self, tab: Tab) -> Option<&str> {
        match tab {
            Tab::Overview => self.overview.as_deref(),
            Tab::Backend => self.backend.as_deref(),
            Tab::Frontend => self.frontend.as_deref(),
            Tab::Instructions => self.instructions.as_deref(),
            Tab::Preview => None,
        }
    }
}

fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

/// A view over a `Solution`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Backend,
    Frontend,
    Preview,
    Instructions,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Backend => "Backend",
            Tab::Frontend => "Frontend",
            Tab::Preview => "Live Preview",
            Tab::Instructions => "Instructions",
        }
    }
}

/// A file recovered from a fenced, path-annotated code block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub path: String,
    pub language: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_tabs_for_fullstack_solution() {
        let solution = Solution {
            overview: text("o"),
            backend: text("b"),
            frontend: text("f"),
            instructions: text("i"),
            preview_image: None,
        };
        assert_eq!(
            solution.available_tabs(),
            vec![
                Tab::Overview,
                Tab::Backend,
                Tab::Frontend,
                Tab::Preview,
                Tab::Instructions
            ]
        );
    }

    #[test]
    fn test_tabs_skip_empty_fields() {
        let solution = Solution {
            backend: text("b"),
            frontend: text(""),
            instructions: text("i"),
            ..Default::default()
        };
        assert_eq!(
            solution.available_tabs(),
            vec![Tab::Backend, Tab::Instructions]
        );
        assert!(Solution::default().available_tabs().is_empty());
    }

    #[test]
    fn test_missing_tab_falls_back_to_first() {
        let solution = Solution {
            backend: text("b"),
            instructions: text("i"),
            ..Default::default()
        };
        assert_eq!(solution.select_tab(Some(Tab::Preview)), Some(Tab::Backend));
        assert_eq!(
            solution.select_tab(Some(Tab::Instructions)),
            Some(Tab::Instructions)
        );
        assert_eq!(solution.select_tab(None), Some(Tab::Backend));
        assert_eq!(Solution::default().select_tab(Some(Tab::Overview)), None);
    }

    #[test]
    fn test_solution_json_uses_camel_case() {
        let solution = Solution {
            frontend: text("f"),
            preview_image: text("data:image/png;base64,AAAA"),
            ..Default::default()
        };
        let json = serde_json::to_string(&solution).unwrap();
        assert_eq!(
            json,
            r#"{"frontend":"f","previewImage":"data:image/png;base64,AAAA"}"#
        );
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, solution);
    }

    #[test]
    fn test_preview_only_for_visual_modes() {
        assert!(!GenerationType::Backend.wants_preview());
        assert!(GenerationType::Frontend.wants_preview());
        assert!(GenerationType::Fullstack.wants_preview());
    }
}
