//! Manifest types and parsing for wrapgen.toml files.

mod file;
mod language;
mod parse;

use std::{collections::BTreeMap, path::PathBuf};

pub use file::WrapgenToml;
pub use language::TargetLanguage;
pub use parse::parse_manifest;
use serde::{Deserialize, Serialize};

/// Root manifest for wrapgen.toml
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub nullability: NullabilityConfig,

    /// Host types outside the batch, mapped to a target type expression.
    ///
    /// Values of these types cross the language boundary unchanged.
    #[serde(default)]
    pub external_types: BTreeMap<String, String>,
}

impl Manifest {
    /// The package generated wrappers for `host_package` are placed in.
    pub fn wrapper_package(&self, host_package: &str) -> String {
        if host_package.is_empty() {
            self.generator.package_suffix.clone()
        } else {
            format!("{}.{}", host_package, self.generator.package_suffix)
        }
    }
}

/// The `[generator]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub language: TargetLanguage,
    /// Appended to the host package to form the wrapper package.
    pub package_suffix: String,
    /// Default output directory, relative to the manifest.
    pub output: PathBuf,
    /// Metadata files or directories, relative to the manifest.
    pub inputs: Vec<PathBuf>,
    /// Worker threads for emission; 0 uses the available parallelism.
    pub jobs: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            language: TargetLanguage::default(),
            package_suffix: "wrappers".to_string(),
            output: PathBuf::from("src/main/scala"),
            inputs: Vec::new(),
            jobs: 0,
        }
    }
}

/// The `[nullability]` section: annotation markers recognized on host declarations.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NullabilityConfig {
    pub non_null: Vec<String>,
    pub nullable: Vec<String>,
}

impl Default for NullabilityConfig {
    fn default() -> Self {
        Self {
            non_null: [
                "javax.annotation.Nonnull",
                "jakarta.annotation.Nonnull",
                "org.jetbrains.annotations.NotNull",
                "androidx.annotation.NonNull",
                "lombok.NonNull",
                "org.checkerframework.checker.nullness.qual.NonNull",
                "edu.umd.cs.findbugs.annotations.NonNull",
            ]
            .map(String::from)
            .to_vec(),
            nullable: [
                "javax.annotation.Nullable",
                "jakarta.annotation.Nullable",
                "org.jetbrains.annotations.Nullable",
                "androidx.annotation.Nullable",
                "org.checkerframework.checker.nullness.qual.Nullable",
                "edu.umd.cs.findbugs.annotations.Nullable",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl NullabilityConfig {
    /// Returns true if any annotation matches a non-null marker.
    pub fn is_non_null(&self, annotations: &[String]) -> bool {
        matches_any(&self.non_null, annotations)
    }

    /// Returns true if any annotation matches a nullable marker.
    pub fn is_nullable(&self, annotations: &[String]) -> bool {
        matches_any(&self.nullable, annotations)
    }
}

fn matches_any(markers: &[String], annotations: &[String]) -> bool {
    annotations
        .iter()
        .any(|annotation| markers.iter().any(|m| marker_matches(m, annotation)))
}

/// A qualified marker matches exactly; a bare marker matches by simple name.
fn marker_matches(marker: &str, annotation: &str) -> bool {
    let annotation = annotation.trim_start_matches('@');
    if marker.contains('.') {
        marker == annotation
    } else {
        wrapgen_core::host_simple_name(annotation) == marker
    }
}
