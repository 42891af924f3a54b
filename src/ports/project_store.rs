use std::path::Path;

use crate::domain::AppError;

/// Filesystem seam used by the scaffold and register phases.
pub trait ProjectStore {
    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Relocate a directory, e.g. `<root>/<name>` into `apps/<name>`.
    fn move_dir(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
