//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::Manifest;
use crate::{Error, Result, SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "wrapgen.toml")
    }
}

impl Manifest {
    /// Parse a wrapgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a wrapgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let suffix = &manifest.generator.package_suffix;
    if suffix.is_empty() {
        return Err(ctx.invalid_package_error(suffix, "package suffix cannot be empty"));
    }
    for segment in suffix.split('.') {
        if let Some(reason) = validate_segment(segment) {
            return Err(ctx.invalid_package_error(suffix, reason));
        }
    }

    for (host, target) in &manifest.external_types {
        if host.trim().is_empty() {
            return Err(ctx.validation_error("external type name cannot be empty", None));
        }
        if target.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("external type '{}' maps to an empty target type", host),
                Some(host),
            ));
        }
    }

    Ok(())
}

/// Returns `Some(reason)` if the segment is not a valid package segment.
fn validate_segment(segment: &str) -> Option<&'static str> {
    let mut chars = segment.chars();
    match chars.next() {
        None => Some("package segments cannot be empty"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            Some("package segments must start with a letter or underscore")
        }
        Some(_) if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') => {
            Some("package segments must contain only letters, digits, and underscores")
        }
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::TargetLanguage;

    #[test]
    fn test_parse_empty_manifest_uses_defaults() {
        let manifest: Manifest = "".parse().unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_parse_full_manifest() {
        let src = r#"
[generator]
language = "scala"
package_suffix = "scala.wrappers"
output = "generated"
inputs = ["build/metadata", "extra.json"]
jobs = 4

[nullability]
non_null = ["NonNull"]
nullable = []

[external_types]
"java.util.UUID" = "java.util.UUID"
"#;
        let manifest: Manifest = src.parse().unwrap();
        assert_eq!(manifest.generator.language, TargetLanguage::Scala);
        assert_eq!(manifest.generator.package_suffix, "scala.wrappers");
        assert_eq!(manifest.generator.output, PathBuf::from("generated"));
        assert_eq!(manifest.generator.inputs.len(), 2);
        assert_eq!(manifest.generator.jobs, 4);
        assert_eq!(manifest.nullability.non_null, ["NonNull"]);
        assert!(manifest.nullability.nullable.is_empty());
        assert_eq!(
            manifest.external_types.get("java.util.UUID").map(String::as_str),
            Some("java.util.UUID")
        );
    }

    #[test]
    fn test_unknown_language_is_parse_error() {
        let err = "[generator]\nlanguage = \"kotlin\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_unknown_section_is_parse_error() {
        let err = "[generatr]\n".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_package_suffix() {
        for suffix in ["", "1abc", "a..b", "a-b"] {
            let src = format!("[generator]\npackage_suffix = \"{}\"\n", suffix);
            let err = src.parse::<Manifest>().unwrap_err();
            match *err {
                Error::InvalidPackage { span, .. } => {
                    assert_eq!(span.map(|s| s.offset()), Some(12), "suffix {:?}", suffix)
                }
                other => panic!("unexpected error for {:?}: {:?}", suffix, other),
            }
        }
    }

    #[test]
    fn test_empty_external_target() {
        let src = "[external_types]\n\"java.util.UUID\" = \" \"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("java.util.UUID"));
        assert!(matches!(*err, Error::Validation { span: Some(_), .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("/nonexistent/wrapgen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
