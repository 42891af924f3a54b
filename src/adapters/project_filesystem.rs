use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Real-filesystem implementation of `ProjectStore`.
#[derive(Debug, Clone, Default)]
pub struct FilesystemProjectStore;

impl FilesystemProjectStore {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn move_dir(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        fs::rename(from, to)?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content)?;
        Ok(())
    }
}
