use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Scratch content directory, removed when the test finishes.
pub struct ContentDir {
    path: PathBuf,
}

impl ContentDir {
    pub fn new(prefix: &str, name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "fileserve-{}-{}-{}",
            prefix,
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }
}

impl Deref for ContentDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl Drop for ContentDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
