//! Starter wrapgen.toml.

use std::path::{Path, PathBuf};

use wrapgen_core::{FileRules, GeneratedFile, Overwrite};
use wrapgen_manifest::TargetLanguage;

/// The wrapgen.toml written by `wrapgen init`. Never overwrites by default.
pub struct WrapgenTomlTemplate {
    pub language: TargetLanguage,
    pub inputs: Vec<String>,
    pub overwrite: Overwrite,
}

impl WrapgenTomlTemplate {
    pub fn new(language: TargetLanguage) -> Self {
        Self {
            language,
            inputs: vec!["build/wrapgen".to_string()],
            overwrite: Overwrite::IfMissing,
        }
    }

    pub fn with_inputs(mut self, inputs: Vec<String>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl GeneratedFile for WrapgenTomlTemplate {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("wrapgen.toml")
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        let inputs = self
            .inputs
            .iter()
            .map(|input| format!("{:?}", input))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            r#"[generator]
language = "{}"
package_suffix = "wrappers"
output = "src/main/scala"
inputs = [{}]
# Worker threads for emission; 0 uses every available core
jobs = 0

# Annotations that mark a declaration non-null or nullable. Bare names
# match any package; the defaults cover javax, jakarta, JetBrains, AndroidX,
# Lombok, Checker Framework and FindBugs.
# [nullability]
# non_null = ["javax.annotation.Nonnull", "NonNull"]
# nullable = ["javax.annotation.Nullable"]

# Host types outside the batch, passed through unchanged:
[external_types]
# "java.util.UUID" = "java.util.UUID"
# "java.time.Instant" = "java.time.Instant"
"#,
            self.language, inputs
        )
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use wrapgen_core::WriteResult;
    use wrapgen_manifest::parse_manifest;

    use super::*;

    #[test]
    fn test_renders_a_valid_manifest() {
        let template = WrapgenTomlTemplate::new(TargetLanguage::Scala)
            .with_inputs(vec!["meta/classes.json".into(), "meta/extra".into()]);
        let manifest = parse_manifest(&template.render(), "wrapgen.toml").unwrap();
        assert_eq!(manifest.generator.language, TargetLanguage::Scala);
        assert_eq!(manifest.generator.inputs.len(), 2);
        assert!(manifest.external_types.is_empty());
    }

    #[test]
    fn test_never_overwrites_by_default() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("wrapgen.toml"), "# mine\n").unwrap();

        let template = WrapgenTomlTemplate::new(TargetLanguage::Scala);
        assert_eq!(template.write(temp.path()).unwrap(), WriteResult::Skipped);
        let kept = std::fs::read_to_string(temp.path().join("wrapgen.toml")).unwrap();
        assert_eq!(kept, "# mine\n");
    }
}
