//! Shared testing utilities for appforge CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Settings fixture with the `INSTALLED_APPS` list ending at the anchor line.
pub const SETTINGS_FIXTURE: &str = "DEBUG = True\n\nINSTALLED_APPS = [\n    'jazzmin',\n    'rest_framework',\n] + DEFAULT_INSTALLED_APPS\n\nMIDDLEWARE = []\n";

/// Shell stand-in for `python manage.py startapp <name>`: creates `<name>/`
/// with a freshly-generated `apps.py`.
const STARTAPP_STUB: &str = r#"#!/bin/sh
set -e
name="$3"
mkdir "$name"
cat > "$name/apps.py" <<EOF
from django.apps import AppConfig


class GeneratedConfig(AppConfig):
    default_auto_field = 'django.db.models.BigAutoField'
    name = '$name'
EOF
"#;

/// Testing harness providing an isolated Django project tree for CLI
/// exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    python_stub: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a project tree with the default settings fixture.
    pub fn new() -> Self {
        Self::with_settings(SETTINGS_FIXTURE)
    }

    /// Create a project tree with custom settings content.
    pub fn with_settings(settings: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(work_dir.join("core")).expect("Failed to create project tree");
        fs::write(work_dir.join("core/settings.py"), settings)
            .expect("Failed to write settings fixture");
        fs::write(work_dir.join("manage.py"), "#!/usr/bin/env python\n")
            .expect("Failed to write manage.py");

        let python_stub = root.path().join("bin").join("fake-python");
        fs::create_dir_all(python_stub.parent().unwrap()).expect("Failed to create stub dir");
        fs::write(&python_stub, STARTAPP_STUB).expect("Failed to write startapp stub");
        fs::set_permissions(&python_stub, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark stub executable");

        Self { root, work_dir, python_stub }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `appforge` binary with the
    /// stub generator.
    pub fn cli(&self) -> Command {
        self.cli_with_python(self.python_stub.to_str().unwrap())
    }

    /// Build a command using a custom interpreter for the generation step.
    pub fn cli_with_python(&self, python: &str) -> Command {
        let mut cmd = Command::cargo_bin("appforge").expect("Failed to locate appforge binary");
        cmd.current_dir(&self.work_dir).env("PYTHON", python);
        cmd
    }

    /// Path to an app directory under `apps/`.
    pub fn app_dir(&self, name: &str) -> PathBuf {
        self.work_dir.join("apps").join(name)
    }

    /// Read a file relative to the project root.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Current content of `core/settings.py`.
    pub fn settings(&self) -> String {
        self.read("core/settings.py")
    }
}
