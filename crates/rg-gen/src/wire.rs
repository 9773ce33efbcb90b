//! Wire shapes for the vendor text-generation endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

impl GenerateRequest {
    /// Single-turn user prompt, the only request shape this system sends.
    pub fn user(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: String::from("user"),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl GenerateResponse {
    /// First candidate's first non-empty text part.
    ///
    /// Every level of the nested response is optional in practice, so each
    /// is checked before extraction.
    pub fn extract_text(&self) -> Option<String> {
        let part = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?;

        if part.text.is_empty() {
            return None;
        }
        Some(part.text.clone())
    }
}
