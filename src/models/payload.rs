use super::{GenerationType, Solution};
use serde::Deserialize;

/// Response body requested in `fullstack` mode.
#[derive(Deserialize, Debug)]
pub struct FullStackPayload {
    pub overview: String,
    pub backend: String,
    pub frontend: String,
    pub instructions: String,
}

/// Response body requested in `backend` and `frontend` mode.
#[derive(Deserialize, Debug)]
pub struct SinglePartPayload {
    pub code: String,
    pub instructions: String,
}

/// A parsed code response, keyed by the mode that requested it.
#[derive(Debug)]
pub enum CodePayload {
    FullStack(FullStackPayload),
    Backend(SinglePartPayload),
    Frontend(SinglePartPayload),
}

impl CodePayload {
    /// Parses raw JSON text against the schema requested for `mode`.
    pub fn parse(mode: GenerationType, text: &str) -> Result<Self, serde_json::Error> {
        Ok(match mode {
            GenerationType::Fullstack => CodePayload::FullStack(serde_json::from_str(text)?),
            GenerationType::Backend => CodePayload::Backend(serde_json::from_str(text)?),
            GenerationType::Frontend => CodePayload::Frontend(serde_json::from_str(text)?),
        })
    }

    /// Collapses the payload into a `Solution` with an optional preview.
    pub fn into_solution(self, preview_image: Option<String>) -> Solution {
        let mut solution = match self {
            CodePayload::FullStack(p) => Solution {
                overview: Some(p.overview),
                backend: Some(p.backend),
                frontend: Some(p.frontend),
                instructions: Some(p.instructions),
                preview_image: None,
            },
            CodePayload::Backend(p) => Solution {
                backend: Some(p.code),
                instructions: Some(p.instructions),
                ..Default::default()
            },
            CodePayload::Frontend(p) => Solution {
                frontend: Some(p.code),
                instructions: Some(p.instructions),
                ..Default::default()
            },
        };
        solution.preview_image = preview_image;
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_code_maps_to_frontend_field() {
        let payload =
            CodePayload::parse(GenerationType::Frontend, r#"{"code":"c","instructions":"i"}"#)
                .unwrap();
        let solution = payload.into_solution(None);
        assert_eq!(solution.frontend.as_deref(), Some("c"));
        assert_eq!(solution.backend, None);
        assert_eq!(solution.instructions.as_deref(), Some("i"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = CodePayload::parse(
            GenerationType::Fullstack,
            r#"{"overview":"o","backend":"b","instructions":"i"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_preview_is_attached() {
        let payload =
            CodePayload::parse(GenerationType::Backend, r#"{"code":"c","instructions":"i"}"#)
                .unwrap();
        let solution = payload.into_solution(Some("data:image/png;base64,AA".to_string()));
        assert_eq!(
            solution.preview_image.as_deref(),
            Some("data:image/png;base64,AA")
        );
    }
}
