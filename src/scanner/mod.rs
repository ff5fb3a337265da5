mod filter;

pub use filter::{ExtensionFilter, FileFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Trait for discovering the files a count run should visit.
pub trait FileScanner {
    /// Scan a path and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the path cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Walks a directory tree and applies a [`FileFilter`] to every regular file.
///
/// A root that is itself a regular file is returned directly (still subject
/// to the filter). Results are sorted so repeated runs report files in a
/// stable order.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        if root.is_file() {
            return if self.filter.should_include(root) {
                vec![root.to_path_buf()]
            } else {
                Vec::new()
            };
        }

        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| self.filter.should_include(p))
            .collect();
        files.sort();
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
