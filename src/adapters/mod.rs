// Adapters layer: concrete implementations of the domain ports (remote generator, resume host).

pub mod gemini;
pub mod resume;

pub use gemini::{GeminiClient, GeminiConfig, GenerationSettings};
pub use resume::LocalResumeHost;
