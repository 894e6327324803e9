use crate::domain::ports::ResumeHost;
use crate::utils::error::{PortfolioError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DOWNLOAD_NAME: &str = "Abdul_Aziz_Resume.pdf";

/// Serves the resume from a file on disk.
#[derive(Debug, Clone)]
pub struct LocalResumeHost {
    source: PathBuf,
    download_dir: PathBuf,
    download_name: String,
}

impl LocalResumeHost {
    pub fn new(source: impl Into<PathBuf>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            download_dir: download_dir.into(),
            download_name: DEFAULT_DOWNLOAD_NAME.to_string(),
        }
    }

    pub fn with_download_name(mut self, name: impl Into<String>) -> Self {
        self.download_name = name.into();
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    fn ensure_source(&self) -> Result<()> {
        if self.source.is_file() {
            Ok(())
        } else {
            Err(PortfolioError::ResourceError {
                resource: self.source.display().to_string(),
                reason: "resume file not found".to_string(),
            })
        }
    }
}

impl ResumeHost for LocalResumeHost {
    fn file_name(&self) -> &str {
        &self.download_name
    }

    fn download(&self) -> Result<PathBuf> {
        self.ensure_source()?;
        fs::create_dir_all(&self.download_dir)?;

        let target = self.download_dir.join(&self.download_name);
        let bytes = fs::copy(&self.source, &target)?;
        tracing::debug!("Copied {} bytes to {}", bytes, target.display());
        Ok(target)
    }

    fn view(&self) -> Result<PathBuf> {
        self.ensure_source()?;
        Ok(fs::canonicalize(&self.source)?)
    }
}
