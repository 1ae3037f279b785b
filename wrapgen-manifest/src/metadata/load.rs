//! Reading metadata files from disk.

use std::path::{Path, PathBuf};

use super::{MetadataFile, RawClass};
use crate::{Error, Result, SourceContext};

/// On-disk encodings for metadata files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    Json,
    Toml,
}

impl MetadataFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(MetadataFormat::Json),
            "toml" => Some(MetadataFormat::Toml),
            _ => None,
        }
    }
}

impl MetadataFile {
    /// Parse metadata from a string with a filename for error reporting.
    pub fn parse(content: &str, filename: &str, format: MetadataFormat) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        match format {
            MetadataFormat::Json => serde_json::from_str(content).map_err(|e| ctx.json_error(e)),
            MetadataFormat::Toml => toml::from_str(content).map_err(|e| ctx.parse_error(e)),
        }
    }

    /// Read and parse a metadata file, detecting the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = MetadataFormat::from_path(path).ok_or_else(|| {
            Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        })?;
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, &path.display().to_string(), format)
    }
}

/// Load every record from the given inputs, in order.
///
/// A directory input contributes its `.json` and `.toml` files (one level,
/// sorted by name) so record order is stable across runs.
pub fn load_inputs(inputs: &[PathBuf]) -> Result<Vec<RawClass>> {
    let mut classes = Vec::new();
    for input in inputs {
        for path in expand_input(input)? {
            classes.extend(MetadataFile::from_file(&path)?.classes);
        }
    }
    Ok(classes)
}

fn expand_input(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let entries = std::fs::read_dir(input).map_err(|e| Error::io(input, e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(input, e))?.path();
        if path.is_file() && MetadataFormat::from_path(&path).is_some() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::ClassKind;

    #[test]
    fn test_parse_toml_records() {
        let src = r#"
[[classes]]
name = "example.CustomerType"
kind = "enum"
constants = ["RETAIL", "WHOLESALE"]

[[classes]]
name = "example.Customer"

[[classes.fields]]
name = "firstName"
type = "String"
modifiers = ["private"]
"#;
        let file = MetadataFile::parse(src, "meta.toml", MetadataFormat::Toml).unwrap();
        assert_eq!(file.classes.len(), 2);
        assert_eq!(file.classes[0].kind, ClassKind::Enum);
        assert_eq!(file.classes[0].constants, ["RETAIL", "WHOLESALE"]);
        assert_eq!(file.classes[1].fields[0].type_name, "String");
    }

    #[test]
    fn test_json_error_has_span() {
        let src = "{\n  \"classes\": [{\"name\": \"a.B\", \"kind\": \"record\"}]\n}";
        let err = MetadataFile::parse(src, "meta.json", MetadataFormat::Json).unwrap_err();
        assert!(matches!(*err, Error::Json { span: Some(_), .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = MetadataFile::from_file("classes.xml").unwrap_err();
        assert!(matches!(*err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_load_inputs_sorts_directory_entries() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("meta");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("b.json"), r#"{"classes": [{"name": "x.B"}]}"#).unwrap();
        fs::write(dir.join("a.toml"), "[[classes]]\nname = \"x.A\"\n").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();
        let extra = temp.path().join("extra.json");
        fs::write(&extra, r#"{"classes": [{"name": "x.C"}]}"#).unwrap();

        let classes = load_inputs(&[dir, extra]).unwrap();
        let names: Vec<_> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["x.A", "x.B", "x.C"]);
    }
}
