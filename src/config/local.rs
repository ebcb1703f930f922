use crate::domain::SessionStore;
use crate::session::SessionState;
use crate::utils::error::{Result, SantaError};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionFormat {
    Json,
    Toml,
}

impl SessionFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SantaError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Session files on the local filesystem, JSON or TOML by extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self, path: &Path) -> Result<SessionState> {
        let format = SessionFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;

        let state: SessionState = match format {
            SessionFormat::Json => serde_json::from_str(&content)?,
            SessionFormat::Toml => toml::from_str(&content)?,
        };
        tracing::debug!("Loaded session from {}", path.display());
        Ok(state)
    }

    fn save(&self, path: &Path, state: &SessionState) -> Result<()> {
        let content = match SessionFormat::from_path(path)? {
            SessionFormat::Json => serde_json::to_string_pretty(state)?,
            SessionFormat::Toml => toml::to_string_pretty(state)?,
        };
        self.write_result(path, content.as_bytes())
    }

    fn write_result(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, data)?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}
