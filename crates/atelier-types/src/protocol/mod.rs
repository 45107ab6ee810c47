//! Protocol definitions for upstream providers.
//!
//! Only the Gemini GenerateContent API is typed here; the image-generation
//! upstream is addressed purely by URL and needs no body types.

pub mod gemini;

pub use gemini::{
    GeminiContent, GeminiErrorBody, GeminiGenerationConfig, GeminiInlineData, GeminiPart,
    GeminiRole, GenerateContentRequest, GenerateContentResponse,
};
