use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// In-memory project store for unit tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectStore {
    // Arc<Mutex> so command tests can clone handles into stub generators.
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_file<P: Into<PathBuf>, S: Into<String>>(&self, path: P, content: S) {
        self.files.lock().unwrap().insert(path.into(), content.into());
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl ProjectStore for MemoryProjectStore {
    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        if files.contains_key(path) || files.keys().any(|p| p.starts_with(path)) {
            return true;
        }
        self.dirs.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn move_dir(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        let mut files = self.files.lock().unwrap();
        let moved: Vec<PathBuf> =
            files.keys().filter(|p| p.starts_with(from)).cloned().collect();
        if moved.is_empty() && !self.dirs.lock().unwrap().contains(from) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", from.display()),
            )));
        }
        for path in moved {
            let content = files.remove(&path).unwrap();
            let relative = path.strip_prefix(from).unwrap().to_path_buf();
            files.insert(to.join(relative), content);
        }
        let mut dirs = self.dirs.lock().unwrap();
        if dirs.remove(from) {
            dirs.insert(to.to_path_buf());
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        self.file(path).ok_or_else(|| {
            AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            ))
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.insert_file(path, content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_dir_reparents_files() {
        let store = MemoryProjectStore::new();
        store.insert_file("/p/blog/apps.py", "name = 'blog'\n");

        store.move_dir(Path::new("/p/blog"), Path::new("/p/apps/blog")).unwrap();

        assert!(!store.exists(Path::new("/p/blog")));
        assert_eq!(
            store.read_to_string(Path::new("/p/apps/blog/apps.py")).unwrap(),
            "name = 'blog'\n"
        );
    }

    #[test]
    fn move_dir_missing_source_errors() {
        let store = MemoryProjectStore::new();
        assert!(store.move_dir(Path::new("/p/none"), Path::new("/p/dest")).is_err());
    }
}
