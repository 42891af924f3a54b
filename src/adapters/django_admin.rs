use std::path::Path;
use std::process::Command;

use crate::domain::{AppError, AppName, MANAGE_PY};
use crate::ports::AppGenerator;

/// Invokes `python manage.py startapp <name>` in the project root.
#[derive(Debug, Clone)]
pub struct DjangoAdminGenerator {
    python: String,
}

impl DjangoAdminGenerator {
    pub fn new<S: Into<String>>(python: S) -> Self {
        Self { python: python.into() }
    }

    /// Use the interpreter named by `$PYTHON`, falling back to `python`.
    pub fn from_env() -> Self {
        let python = std::env::var("PYTHON").unwrap_or_else(|_| "python".to_string());
        Self::new(python)
    }

    fn run(&self, args: &[&str], cwd: &Path) -> Result<String, AppError> {
        let mut command = Command::new(&self.python);
        command.args(args);
        command.current_dir(cwd);

        let output = command.output().map_err(|e| AppError::Generator {
            command: format!("{} {}", self.python, args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Generator {
                command: format!("{} {}", self.python, args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl AppGenerator for DjangoAdminGenerator {
    fn generate(&self, name: &AppName, cwd: &Path) -> Result<(), AppError> {
        self.run(&[MANAGE_PY, "startapp", name.as_str()], cwd)?;
        Ok(())
    }
}
