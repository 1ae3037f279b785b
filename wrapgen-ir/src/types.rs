//! Host type references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a host type reference is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// A JVM primitive or `java.lang.String`.
    Primitive,
    /// A boxed primitive such as `java.lang.Integer`.
    BoxedPrimitive,
    /// An enumeration known to the batch.
    Enum,
    /// Any other class, resolved later against the batch or external mappings.
    UserClass,
    /// A generic type applied to type arguments.
    Parameterized,
}

/// Scalar values every target language has a native type for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scalar {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    String,
}

impl Scalar {
    const ALL: [Scalar; 9] = [
        Scalar::Boolean,
        Scalar::Byte,
        Scalar::Short,
        Scalar::Int,
        Scalar::Long,
        Scalar::Float,
        Scalar::Double,
        Scalar::Char,
        Scalar::String,
    ];

    /// Look up a scalar by its unboxed host name (`int`, `java.lang.String`).
    pub fn from_primitive(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scalar| scalar.primitive_name() == name)
    }

    /// Look up a scalar by its boxed host name (`java.lang.Integer`).
    pub fn from_boxed(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scalar| scalar.boxed_name() == Some(name))
    }

    /// The unboxed host name.
    pub fn primitive_name(&self) -> &'static str {
        match self {
            Scalar::Boolean => "boolean",
            Scalar::Byte => "byte",
            Scalar::Short => "short",
            Scalar::Int => "int",
            Scalar::Long => "long",
            Scalar::Float => "float",
            Scalar::Double => "double",
            Scalar::Char => "char",
            Scalar::String => "java.lang.String",
        }
    }

    /// The boxed host name, if the scalar has a boxed form.
    pub fn boxed_name(&self) -> Option<&'static str> {
        match self {
            Scalar::Boolean => Some("java.lang.Boolean"),
            Scalar::Byte => Some("java.lang.Byte"),
            Scalar::Short => Some("java.lang.Short"),
            Scalar::Int => Some("java.lang.Integer"),
            Scalar::Long => Some("java.lang.Long"),
            Scalar::Float => Some("java.lang.Float"),
            Scalar::Double => Some("java.lang.Double"),
            Scalar::Char => Some("java.lang.Character"),
            Scalar::String => None,
        }
    }

    /// Returns true for scalars that are JVM primitives when unboxed.
    pub fn is_jvm_primitive(&self) -> bool {
        !matches!(self, Scalar::String)
    }
}

/// A reference to a host type.
///
/// `type_arguments` nests without limit: `List<List<Integer>>` is one
/// parameterized reference whose single argument is itself parameterized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub kind: TypeKind,
    /// Qualified host name of the type (raw type for parameterized references).
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<TypeRef>,
    /// Whether a value of this reference may be absent.
    pub nullable: bool,
}

impl TypeRef {
    /// A primitive reference. JVM primitives are never nullable; strings start nullable.
    pub fn primitive(scalar: Scalar) -> Self {
        Self {
            kind: TypeKind::Primitive,
            name: scalar.primitive_name().to_string(),
            type_arguments: Vec::new(),
            nullable: !scalar.is_jvm_primitive(),
        }
    }

    /// A boxed primitive reference.
    ///
    /// Falls back to the primitive form for scalars without a boxed type.
    pub fn boxed(scalar: Scalar) -> Self {
        match scalar.boxed_name() {
            Some(name) => Self::new(TypeKind::BoxedPrimitive, name),
            None => Self::primitive(scalar),
        }
    }

    /// A reference to an enumeration.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Enum, name)
    }

    /// A reference to a user-defined class.
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(TypeKind::UserClass, name)
    }

    /// A generic type applied to the given arguments.
    pub fn parameterized(name: impl Into<String>, type_arguments: Vec<TypeRef>) -> Self {
        Self {
            type_arguments,
            ..Self::new(TypeKind::Parameterized, name)
        }
    }

    /// The return type of a method that returns nothing.
    pub fn void() -> Self {
        Self {
            kind: TypeKind::Primitive,
            name: "void".to_string(),
            type_arguments: Vec::new(),
            nullable: false,
        }
    }

    /// Returns true for the `void` return type.
    pub fn is_void(&self) -> bool {
        self.kind == TypeKind::Primitive && self.name == "void"
    }

    fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            type_arguments: Vec::new(),
            nullable: true,
        }
    }

    /// Set nullability. JVM primitives stay non-null regardless.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable && !self.is_jvm_primitive();
        self
    }

    /// The scalar this reference denotes, for primitive and boxed kinds.
    pub fn scalar(&self) -> Option<Scalar> {
        match self.kind {
            TypeKind::Primitive => Scalar::from_primitive(&self.name),
            TypeKind::BoxedPrimitive => Scalar::from_boxed(&self.name),
            _ => None,
        }
    }

    /// Returns true for unboxed JVM primitives (`int`, `boolean`, ...).
    pub fn is_jvm_primitive(&self) -> bool {
        self.kind == TypeKind::Primitive
            && self.scalar().is_some_and(|scalar| scalar.is_jvm_primitive())
    }

    /// Returns true for `boolean` and `java.lang.Boolean`.
    pub fn is_boolean(&self) -> bool {
        self.scalar() == Some(Scalar::Boolean)
    }

    /// Whether `qualified_name` appears here or in any type argument.
    pub fn mentions(&self, qualified_name: &str) -> bool {
        self.name == qualified_name
            || self.type_arguments.iter().any(|arg| arg.mentions(qualified_name))
    }

    /// Structural equality ignoring nullability at every level.
    pub fn same_shape(&self, other: &TypeRef) -> bool {
        self.kind == other.kind
            && self.name == other.name
            && self.type_arguments.len() == other.type_arguments.len()
            && self
                .type_arguments
                .iter()
                .zip(&other.type_arguments)
                .all(|(a, b)| a.same_shape(b))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.type_arguments.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.type_arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}
