use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Remote text generation: submit a prompt, get text or a failure.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &str;
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Host-side handling of the resume document (save a copy, open for viewing).
pub trait ResumeHost: Send + Sync {
    /// File name the saved copy is given.
    fn file_name(&self) -> &str;
    fn download(&self) -> Result<PathBuf>;
    fn view(&self) -> Result<PathBuf>;
}
