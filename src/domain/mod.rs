//! Domain types and pure text operations.

mod app_name;
mod error;
mod project;
pub mod settings;

pub use app_name::AppName;
pub use error::AppError;
pub use project::{APPS_DIR, APP_CONFIG_FILE, MANAGE_PY, ProjectLayout, SETTINGS_FILE};
