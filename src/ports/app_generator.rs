use std::path::Path;

use crate::domain::{AppError, AppName};

/// External collaborator that generates the standard starting layout for a
/// Django app.
///
/// `generate` is expected to leave a directory named exactly `<name>` in
/// `cwd`, pre-populated with the framework's standard files. Callers must
/// check the result explicitly; a failed generation leaves no directory
/// behind.
pub trait AppGenerator {
    fn generate(&self, name: &AppName, cwd: &Path) -> Result<(), AppError>;
}
