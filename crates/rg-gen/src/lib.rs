mod client;
mod error;
pub mod prompt;
mod wire;

pub use client::{GenerationService, HttpGenerationClient};
pub use error::{GenError, Result};
pub use wire::{Candidate, CandidateContent, Content, GenerateRequest, GenerateResponse, Part};
