use std::path::{Path, PathBuf};

use crate::domain::{AppError, AppName};

/// Target directory for relocated app directories.
pub const APPS_DIR: &str = "apps";
/// The shared settings module mutated by the register phase.
pub const SETTINGS_FILE: &str = "core/settings.py";
/// Django management entry point used for app generation.
pub const MANAGE_PY: &str = "manage.py";
/// Config module written by `startapp` inside each generated app.
pub const APP_CONFIG_FILE: &str = "apps.py";

/// Fixed filesystem layout of the Django project being scaffolded.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at the given project directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a layout rooted at the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn apps_dir(&self) -> PathBuf {
        self.root.join(APPS_DIR)
    }

    /// Where `startapp` leaves the generated directory, before relocation.
    pub fn generated_dir(&self, name: &AppName) -> PathBuf {
        self.root.join(name.as_str())
    }

    /// Final location of an app directory, `apps/<name>/`.
    pub fn app_dir(&self, name: &AppName) -> PathBuf {
        self.apps_dir().join(name.as_str())
    }

    /// The generated config module, `apps/<name>/apps.py`.
    pub fn app_config_file(&self, name: &AppName) -> PathBuf {
        self.app_dir(name).join(APP_CONFIG_FILE)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }
}
