mod app_generator;
mod project_store;

pub use app_generator::AppGenerator;
pub use project_store::ProjectStore;
