#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sloc-scan binary.
#[macro_export]
macro_rules! sloc_scan {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sloc-scan"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a sloc-scan config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".sloc-scan.toml", content);
    }

    /// Creates a Java source file mixing code, comments and blank lines.
    /// Contains exactly 3 lines of code.
    pub fn create_java_sample(&self, relative_path: &str) {
        self.create_file(
            relative_path,
            "// header comment\n\
             \n\
             public class Sample {\n\
                 /* block\n\
                  * comment\n\
                  */\n\
                 int x = 1; // trailing note\n\
             }\n",
        );
    }
}

pub const JAVA_ONLY_CONFIG: &str = "extensions = [\"java\"]\n";
