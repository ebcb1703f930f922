use crate::config::DrawSettings;
use crate::domain::model::DrawSelection;
use crate::domain::requirements::DrawRequirements;
use crate::session::SessionState;
use crate::utils::error::{DrawError, Result};
use std::path::Path;

/// The single operation the draw core offers its collaborators.
pub trait DrawService: Send + Sync {
    fn draw(&self, requirements: &DrawRequirements) -> std::result::Result<DrawSelection, DrawError>;
}

pub trait SessionStore: Send + Sync {
    fn load(&self, path: &Path) -> Result<SessionState>;
    fn save(&self, path: &Path, state: &SessionState) -> Result<()>;
    fn write_result(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait SettingsProvider: Send + Sync {
    fn session_path(&self) -> &Path;
    fn output_path(&self) -> Option<&Path>;
    /// Settings after command line overrides are applied to `base`.
    fn draw_settings(&self, base: Option<&DrawSettings>) -> DrawSettings;
}
