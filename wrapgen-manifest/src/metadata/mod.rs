//! Raw class-metadata records.
//!
//! These mirror what a reflection pass or source parser reports for each
//! host class. Type names are kept as written (generic signature strings);
//! interpreting them is the extractor's job.

mod load;

use serde::{Deserialize, Serialize};

pub use load::{MetadataFormat, load_inputs};

/// A metadata file: a list of class records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataFile {
    #[serde(default)]
    pub classes: Vec<RawClass>,
}

/// Whether a record describes a class or an enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Enum,
}

/// Declaration modifiers. Unknown modifiers are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
    Transient,
    Volatile,
    Synchronized,
    Native,
}

/// One host class as reported by the metadata source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawClass {
    /// Qualified name; nested classes use `$`.
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    /// Enum constants in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constants: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<RawField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructors: Vec<RawConstructor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<RawMethod>,
}

impl RawClass {
    pub fn is_enum(&self) -> bool {
        self.kind == ClassKind::Enum
    }

    /// Constructors callable from generated code.
    pub fn public_constructors(&self) -> impl Iterator<Item = &RawConstructor> {
        self.constructors
            .iter()
            .filter(|c| has(&c.modifiers, Modifier::Public) && !has(&c.modifiers, Modifier::Static))
    }

    /// Public instance methods, in declaration order.
    pub fn public_methods(&self) -> impl Iterator<Item = &RawMethod> {
        self.methods
            .iter()
            .filter(|m| m.is_public() && !m.is_static())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

impl RawField {
    pub fn is_static(&self) -> bool {
        has(&self.modifiers, Modifier::Static)
    }

    pub fn is_final(&self) -> bool {
        has(&self.modifiers, Modifier::Final)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawConstructor {
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
    #[serde(default = "public_only")]
    pub modifiers: Vec<Modifier>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawMethod {
    pub name: String,
    #[serde(default = "void")]
    pub returns: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<RawParameter>,
    /// Declared exception types, verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub throws: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
    #[serde(default = "public_only")]
    pub modifiers: Vec<Modifier>,
}

impl RawMethod {
    pub fn is_public(&self) -> bool {
        has(&self.modifiers, Modifier::Public)
    }

    pub fn is_static(&self) -> bool {
        has(&self.modifiers, Modifier::Static)
    }

    pub fn returns_void(&self) -> bool {
        self.returns == "void"
    }
}

fn has(modifiers: &[Modifier], modifier: Modifier) -> bool {
    modifiers.contains(&modifier)
}

fn void() -> String {
    "void".to_string()
}

fn public_only() -> Vec<Modifier> {
    vec![Modifier::Public]
}
