use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_with_rules(&self.path(base), &self.render(), &self.rules())
    }
}

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    match rules.overwrite {
        Overwrite::Always => {
            // Leave identical files untouched so build tools see no change
            if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
                return Ok(WriteResult::Unchanged);
            }
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfMissing => {
            if path.exists() {
                Ok(WriteResult::Skipped)
            } else {
                write_file(path, content)?;
                Ok(WriteResult::Written)
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the exact content
    Unchanged,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Only create the file if it does not exist yet
    pub fn if_missing(mut self) -> Self {
        self.rules.overwrite = Overwrite::IfMissing;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        write_with_rules(&self.path, &self.content, &self.rules)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (configuration scaffolds)
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("example").join("wrappers").join("A.scala");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Customer.scala");

        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_identical_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Customer.scala");

        let file = File::new(&path, "same");
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_file_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wrapgen.toml");

        let result = File::new(&path, "new content").if_missing().write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wrapgen.toml");

        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "should not write")
            .if_missing()
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_generated_file_trait_uses_rules() {
        struct Scaffold;

        impl GeneratedFile for Scaffold {
            fn path(&self, base: &Path) -> PathBuf {
                base.join("wrapgen.toml")
            }

            fn rules(&self) -> FileRules {
                FileRules {
                    overwrite: Overwrite::IfMissing,
                }
            }

            fn render(&self) -> String {
                "[generator]\n".to_string()
            }
        }

        let temp = TempDir::new().unwrap();
        assert_eq!(Scaffold.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(Scaffold.write(temp.path()).unwrap(), WriteResult::Skipped);
    }
}
