//! Class descriptors.

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// One host class, as extracted from its raw metadata.
///
/// Built once per generation run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Qualified host name, e.g. `example.Customer` (nested classes use `$`).
    pub qualified_name: String,
    pub fields: Vec<FieldDescriptor>,
    pub constructors: Vec<ConstructorDescriptor>,
    /// Accessor methods, bound and unbound, in declaration order.
    pub accessors: Vec<MethodDescriptor>,
    /// Mutator methods bound to a field, in declaration order.
    pub mutators: Vec<MethodDescriptor>,
    pub is_enum: bool,
    /// Enum constants in declaration order. Empty for classes.
    pub enum_constants: Vec<String>,
}

impl ClassDescriptor {
    /// Create an empty class descriptor.
    pub fn class(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            fields: Vec::new(),
            constructors: Vec::new(),
            accessors: Vec::new(),
            mutators: Vec::new(),
            is_enum: false,
            enum_constants: Vec::new(),
        }
    }

    /// Create an enum descriptor with its constants in declaration order.
    pub fn enumeration(
        qualified_name: impl Into<String>,
        constants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            is_enum: true,
            enum_constants: constants.into_iter().map(Into::into).collect(),
            ..Self::class(qualified_name)
        }
    }

    /// The package part of the qualified name (empty for the default package).
    pub fn package(&self) -> &str {
        self.qualified_name
            .rsplit_once('.')
            .map(|(package, _)| package)
            .unwrap_or("")
    }

    /// The class name without its package, nested classes keeping their `$`.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit_once('.')
            .map(|(_, name)| name)
            .unwrap_or(&self.qualified_name)
    }

    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The accessor bound to the given field, if any.
    pub fn accessor_for(&self, field: &str) -> Option<&MethodDescriptor> {
        self.accessors
            .iter()
            .find(|m| m.field.as_deref() == Some(field))
    }

    /// The mutator bound to the given field, if any.
    pub fn mutator_for(&self, field: &str) -> Option<&MethodDescriptor> {
        self.mutators
            .iter()
            .find(|m| m.field.as_deref() == Some(field))
    }

    /// Accessors with no backing field (computed values).
    pub fn unbound_accessors(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.accessors.iter().filter(|m| m.field.is_none())
    }

    /// Every type reference used by a member of this class.
    pub fn type_refs(&self) -> impl Iterator<Item = &TypeRef> {
        self.fields
            .iter()
            .map(|f| &f.type_ref)
            .chain(
                self.constructors
                    .iter()
                    .flat_map(|c| c.parameters.iter().map(|p| &p.type_ref)),
            )
            .chain(self.accessors.iter().map(|m| &m.return_type))
            .chain(self.mutators.iter().flat_map(|m| m.parameters.iter()))
    }

    /// Whether any member refers to the class `qualified_name`.
    pub fn references(&self, qualified_name: &str) -> bool {
        self.type_refs().any(|ty| ty.mentions(qualified_name))
    }
}

/// A field of a host class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub type_ref: TypeRef,
    pub is_final: bool,
    /// A host accessor is bound to this field.
    pub has_accessor: bool,
    /// A host mutator is bound to this field.
    pub has_mutator: bool,
}

/// One declared constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDescriptor {
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

/// A named constructor parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_ref: TypeRef,
}

/// An accessor or mutator method signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub parameters: Vec<TypeRef>,
    pub return_type: TypeRef,
    /// Declared exception types, fully qualified.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub declared_exceptions: Vec<String>,
    /// The field this method is bound to, `None` for unbound accessors.
    pub field: Option<String>,
}

impl MethodDescriptor {
    /// Returns true if the host method declares any exception.
    pub fn is_fallible(&self) -> bool {
        !self.declared_exceptions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;

    fn customer() -> ClassDescriptor {
        let string = TypeRef::primitive(Scalar::String);
        ClassDescriptor {
            fields: vec![FieldDescriptor {
                name: "firstName".into(),
                type_ref: string.clone(),
                is_final: false,
                has_accessor: true,
                has_mutator: false,
            }],
            accessors: vec![
                MethodDescriptor {
                    name: "getFirstName".into(),
                    parameters: vec![],
                    return_type: string.clone(),
                    declared_exceptions: vec![],
                    field: Some("firstName".into()),
                },
                MethodDescriptor {
                    name: "getFullName".into(),
                    parameters: vec![],
                    return_type: string,
                    declared_exceptions: vec![],
                    field: None,
                },
            ],
            ..ClassDescriptor::class("example.Customer")
        }
    }

    #[test]
    fn test_names() {
        let class = customer();
        assert_eq!(class.package(), "example");
        assert_eq!(class.simple_name(), "Customer");

        let nested = ClassDescriptor::class("a.b.Outer$Inner");
        assert_eq!(nested.package(), "a.b");
        assert_eq!(nested.simple_name(), "Outer$Inner");

        let default_package = ClassDescriptor::class("Thing");
        assert_eq!(default_package.package(), "");
        assert_eq!(default_package.simple_name(), "Thing");
    }

    #[test]
    fn test_bindings() {
        let class = customer();
        assert_eq!(
            class.accessor_for("firstName").map(|m| m.name.as_str()),
            Some("getFirstName")
        );
        assert!(class.mutator_for("firstName").is_none());
        let unbound: Vec<_> = class.unbound_accessors().map(|m| &m.name).collect();
        assert_eq!(unbound, ["getFullName"]);
    }

    #[test]
    fn test_enum_keeps_declaration_order() {
        let e = ClassDescriptor::enumeration("example.CustomerType", ["RETAIL", "WHOLESALE"]);
        assert!(e.is_enum);
        assert_eq!(e.enum_constants, ["RETAIL", "WHOLESALE"]);
    }

    #[test]
    fn test_type_refs_cover_all_members() {
        assert_eq!(customer().type_refs().count(), 3);
    }

    #[test]
    fn test_references() {
        let mut order = ClassDescriptor::class("example.Order");
        order.constructors.push(ConstructorDescriptor {
            parameters: vec![Parameter {
                name: "buyer".into(),
                type_ref: TypeRef::class("example.Customer"),
            }],
        });
        assert!(order.references("example.Customer"));
        assert!(!order.references("example.Invoice"));
        assert!(!customer().references("example.Order"));
    }
}
