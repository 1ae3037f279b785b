use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// A wrapgen.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct WrapgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl WrapgenToml {
    /// Open and parse a wrapgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the file; relative settings resolve against it.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Metadata inputs resolved against the manifest directory.
    pub fn input_paths(&self) -> Vec<PathBuf> {
        self.manifest
            .generator
            .inputs
            .iter()
            .map(|input| self.base_dir().join(input))
            .collect()
    }

    /// Output directory resolved against the manifest directory.
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir().join(&self.manifest.generator.output)
    }
}
