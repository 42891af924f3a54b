mod django_admin;
#[cfg(test)]
mod memory_project_store;
mod project_filesystem;

pub use django_admin::DjangoAdminGenerator;
#[cfg(test)]
pub(crate) use memory_project_store::MemoryProjectStore;
pub use project_filesystem::FilesystemProjectStore;
