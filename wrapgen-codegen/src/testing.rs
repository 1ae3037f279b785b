//! Test utilities for wrapper generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{path::Path, process::Command};

use eyre::{Result, eyre};
use wrapgen_manifest::{
    ClassKind, Modifier, RawClass, RawConstructor, RawField, RawMethod, RawParameter,
};

/// Builds raw class records the way a metadata source would report them.
pub struct RawClassBuilder {
    class: RawClass,
}

impl RawClassBuilder {
    /// Start a public class record.
    pub fn class(name: &str) -> Self {
        Self {
            class: RawClass {
                name: name.to_string(),
                kind: ClassKind::Class,
                constants: Vec::new(),
                modifiers: vec![Modifier::Public],
                fields: Vec::new(),
                constructors: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    /// A complete enum record.
    pub fn enumeration(name: &str, constants: &[&str]) -> RawClass {
        let mut class = Self::class(name).class;
        class.kind = ClassKind::Enum;
        class.constants = strings(constants);
        class
    }

    /// Add a private instance field.
    pub fn field(mut self, name: &str, type_name: &str, annotations: &[&str]) -> Self {
        self.class.fields.push(RawField {
            name: name.to_string(),
            type_name: type_name.to_string(),
            modifiers: vec![Modifier::Private],
            annotations: strings(annotations),
        });
        self
    }

    /// Add a public no-argument method.
    pub fn getter(mut self, name: &str, returns: &str, annotations: &[&str]) -> Self {
        self.class.methods.push(RawMethod {
            name: name.to_string(),
            returns: returns.to_string(),
            parameters: Vec::new(),
            throws: Vec::new(),
            annotations: strings(annotations),
            modifiers: vec![Modifier::Public],
        });
        self
    }

    /// Add a public one-argument `void` method.
    pub fn setter(mut self, name: &str, parameter_type: &str, throws: &[&str]) -> Self {
        self.class.methods.push(RawMethod {
            name: name.to_string(),
            returns: "void".to_string(),
            parameters: vec![RawParameter {
                name: "value".to_string(),
                type_name: parameter_type.to_string(),
                annotations: Vec::new(),
            }],
            throws: strings(throws),
            annotations: Vec::new(),
            modifiers: vec![Modifier::Public],
        });
        self
    }

    /// Add a public constructor from `(name, type, annotations)` triples.
    pub fn constructor(mut self, parameters: &[(&str, &str, &[&str])]) -> Self {
        self.class.constructors.push(RawConstructor {
            parameters: parameters
                .iter()
                .map(|(name, type_name, annotations)| RawParameter {
                    name: name.to_string(),
                    type_name: type_name.to_string(),
                    annotations: strings(annotations),
                })
                .collect(),
            modifiers: vec![Modifier::Public],
        });
        self
    }

    pub fn build(self) -> RawClass {
        self.class
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// `example.Customer`: two strings and an enum, one fallible setter.
pub fn customer() -> RawClass {
    RawClassBuilder::class("example.Customer")
        .field("firstName", "String", &[])
        .field("lastName", "String", &[])
        .field("customerType", "example.CustomerType", &[])
        .constructor(&[
            ("firstName", "String", &[]),
            ("lastName", "String", &[]),
            ("customerType", "example.CustomerType", &[]),
        ])
        .getter("getFirstName", "String", &["javax.annotation.Nonnull"])
        .getter("getLastName", "String", &[])
        .getter("getCustomerType", "example.CustomerType", &[])
        .setter("setLastName", "String", &["IllegalArgumentException"])
        .build()
}

/// `example.CustomerType`: a two-constant enum.
pub fn customer_type() -> RawClass {
    RawClassBuilder::enumeration("example.CustomerType", &["RETAIL", "WHOLESALE"])
}

/// `example.Container`: nested generics over boxed integers.
pub fn container() -> RawClass {
    RawClassBuilder::class("example.Container")
        .field("matrix", "java.util.List<java.util.List<Integer>>", &[])
        .constructor(&[("matrix", "java.util.List<java.util.List<Integer>>", &[])])
        .getter(
            "getMatrix",
            "java.util.List<java.util.List<Integer>>",
            &["javax.annotation.Nonnull"],
        )
        .setter("setMatrix", "java.util.List<java.util.List<Integer>>", &[])
        .build()
}

/// `example.Order`: references another batch class, plus a computed accessor.
pub fn order() -> RawClass {
    RawClassBuilder::class("example.Order")
        .field("id", "long", &[])
        .field("buyer", "example.Customer", &[])
        .field("lines", "java.util.Map<String, Integer>", &[])
        .field("paid", "boolean", &[])
        .constructor(&[("id", "long", &[]), ("buyer", "example.Customer", &[])])
        .getter("getId", "long", &[])
        .getter("getBuyer", "example.Customer", &[])
        .getter("getLines", "java.util.Map<String, Integer>", &["javax.annotation.Nonnull"])
        .getter("isPaid", "boolean", &[])
        .getter("getTotal", "double", &[])
        .setter("setPaid", "boolean", &[])
        .build()
}

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Verifies that generated sources compile.
pub trait CompileChecker {
    /// Check that the sources in the given directory compile.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Scala compile checker using `scala-cli compile`.
///
/// The directory also needs the host classes on the classpath; callers pass
/// them through `classpath`.
pub struct ScalaChecker {
    pub scala_version: String,
    pub classpath: Vec<String>,
}

impl Default for ScalaChecker {
    fn default() -> Self {
        Self {
            scala_version: "2.13".to_string(),
            classpath: Vec::new(),
        }
    }
}

impl CompileChecker for ScalaChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let mut command = Command::new("scala-cli");
        command
            .args(["compile", "--scala", self.scala_version.as_str()])
            .current_dir(dir);
        for entry in &self.classpath {
            command.args(["--extra-jars", entry.as_str()]);
        }
        command.arg(".");

        let output = command.output().map_err(|e| CompileError {
            message: format!("Failed to run scala-cli: {}", e),
            output: String::new(),
        })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "scala-cli compile failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

/// Assert that two strings are equal, listing differing lines on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected == actual {
        return;
    }
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let mut diff = String::new();
    for i in 0..expected_lines.len().max(actual_lines.len()) {
        let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
        let act = actual_lines.get(i).copied().unwrap_or("<missing>");
        if exp != act {
            diff.push_str(&format!(
                "Line {}:\n  expected: {}\n  actual:   {}\n",
                i + 1,
                exp,
                act
            ));
        }
    }
    panic!("Content mismatch:\n{}", diff);
}

/// Generate into a temporary directory, cleaned up when the `TempDir` drops.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Run a generator and check that its output compiles.
pub fn assert_generates_valid_code<C>(
    generate: impl FnOnce(&Path) -> Result<()>,
    checker: &C,
) -> Result<()>
where
    C: CompileChecker,
{
    let temp_dir = generate_to_temp(generate)?;

    checker.check(temp_dir.path()).map_err(|e| {
        eprintln!("Generated files in {}:", temp_dir.path().display());
        if let Ok(entries) = std::fs::read_dir(temp_dir.path()) {
            for entry in entries.flatten() {
                eprintln!("  {}", entry.path().display());
            }
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(())
}
