// src/api/config.rs

use super::CodeRequest;
use crate::models::GenerationType;
use serde_json::{json, Value};

/// Base URL for the Gemini API.
pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for code generation.
pub const DEFAULT_CODE_MODEL: &str = "gemini-2.5-pro";

/// Default model for preview images.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Fence format shared by every mode.
const COMMON_INSTRUCTIONS: &str = "Your response must be in a specific JSON format. For code, you must use language-specific, fenced code blocks with file paths within a markdown formatted string, following this exact format: ```language:path/to/file.ext\n// your code here\n```. This is crucial for parsing.";

const BACKEND_INSTRUCTIONS: &str = "You are a world-class senior backend engineer with expertise in Node.js, Python, and various database technologies. A user will request a backend feature. Your task is to provide a complete, production-ready solution.
The response MUST be a single valid JSON object with two keys: \"code\", and \"instructions\".
- \"code\": A string containing the complete backend solution in Markdown, including all necessary files like package.json and the main server file.
- \"instructions\": A string containing a step-by-step guide in Markdown on how to set up and run the backend project, including API usage examples with cURL.";

const FRONTEND_INSTRUCTIONS: &str = "You are a world-class senior frontend engineer specializing in React, TypeScript, and Tailwind CSS. A user will request a frontend feature. Your task is to provide a complete, production-ready solution.
The response MUST be a single valid JSON object with two keys: \"code\", and \"instructions\".
- \"code\": A string containing the complete frontend solution in Markdown, including all necessary files like package.json, index.html, and React components.
- \"instructions\": A string containing a step-by-step guide in Markdown on how to set up and run the frontend project.";

const FULLSTACK_INSTRUCTIONS: &str = "You are a world-class senior full-stack engineer with expertise in Node.js, React, and various database technologies. A user will request a full-stack application. Your task is to provide a complete, integrated, production-ready, and well-documented solution.
The response MUST be a single valid JSON object with four keys: \"overview\", \"backend\", \"frontend\", and \"instructions\".
- \"overview\": A brief, high-level overview of the proposed architecture in Markdown.
- \"backend\": A string containing the complete backend solution in Markdown.
- \"frontend\": A string containing the complete frontend solution in Markdown.
- \"instructions\": A string containing a step-by-step guide in Markdown on how to set up and run the entire project.";

/// System instruction for a generation mode.
pub fn system_instruction(mode: GenerationType) -> String {
    let role = match mode {
        GenerationType::Backend => BACKEND_INSTRUCTIONS,
        GenerationType::Frontend => FRONTEND_INSTRUCTIONS,
        GenerationType::Fullstack => FULLSTACK_INSTRUCTIONS,
    };
    format!("{}\n{}", role, COMMON_INSTRUCTIONS)
}

/// Response schema for a generation mode, in the API's schema dialect.
pub fn response_schema(mode: GenerationType) -> Value {
    match mode {
        GenerationType::Fullstack => json!({
            "type": "OBJECT",
            "properties": {
                "overview": {
                    "type": "STRING",
                    "description": "A brief, high-level overview of the proposed architecture for the full-stack solution, explaining how the frontend and backend connect. This should be in Markdown format."
                },
                "backend": {
                    "type": "STRING",
                    "description": "The complete backend solution in a single Markdown formatted string. The markdown must contain distinct, fenced code blocks for each file. Use the format ```language:path/to/file.ext```. Include at least `backend/package.json` and a main server file."
                },
                "frontend": {
                    "type": "STRING",
                    "description": "The complete frontend solution in a single Markdown formatted string. The markdown must contain distinct, fenced code blocks for each file. Use the format ```language:path/to/file.ext```. Include `frontend/index.html`, `frontend/src/App.jsx` (the main React component), and `frontend/package.json`."
                },
                "instructions": {
                    "type": "STRING",
                    "description": "A detailed, step-by-step guide in Markdown format on how to set up the project. It should include instructions for installing dependencies (e.g., 'npm install') and running both the backend and frontend servers locally."
                }
            },
            "required": ["overview", "backend", "frontend", "instructions"]
        }),
        GenerationType::Backend | GenerationType::Frontend => json!({
            "type": "OBJECT",
            "properties": {
                "code": {
                    "type": "STRING",
                    "description": "The complete code solution in a single Markdown formatted string. The markdown must contain distinct, fenced code blocks for each file. Use the format ```language:path/to/file.ext```."
                },
                "instructions": {
                    "type": "STRING",
                    "description": "A detailed, step-by-step guide in Markdown format on how to set up the project. It should include instructions for installing dependencies (e.g., 'npm install') and running the application locally."
                }
            },
            "required": ["code", "instructions"]
        }),
    }
}

/// Builds the code request for a prompt.
pub fn code_request(prompt: &str, mode: GenerationType) -> CodeRequest {
    CodeRequest {
        system_instruction: system_instruction(mode),
        prompt: prompt.to_string(),
        schema: response_schema(mode),
    }
}

/// Prompt for the dashboard-style preview image.
pub fn preview_prompt(user_prompt: &str) -> String {
    format!(
        "A visually stunning dashboard UI for a web application that does the following: \"{}\". The image should look like a screenshot of a beautiful, modern, and intuitive dashboard interface with creative data visualizations, charts, and graphs.",
        user_prompt
    )
}
