//! Nullability policy.
//!
//! A member is non-null only when an explicit marker says so (or its type is
//! a JVM primitive). Markers were already read during extraction and live in
//! each `TypeRef.nullable`; this module combines them per member.

use wrapgen_ir::{ClassDescriptor, FieldDescriptor, MethodDescriptor, Parameter};

/// Decides whether a member's target type is optional-wrapped.
pub struct NullabilityResolver<'a> {
    class: &'a ClassDescriptor,
}

impl<'a> NullabilityResolver<'a> {
    pub fn new(class: &'a ClassDescriptor) -> Self {
        Self { class }
    }

    /// A field is non-null when the field or its bound accessor is marked.
    pub fn field(&self, field: &FieldDescriptor) -> bool {
        let accessor_nullable = self
            .class
            .accessor_for(&field.name)
            .is_none_or(|accessor| accessor.return_type.nullable);
        field.type_ref.nullable && accessor_nullable
    }

    /// Bound accessors follow their field; unbound ones their own marker.
    pub fn accessor(&self, accessor: &MethodDescriptor) -> bool {
        match accessor.field.as_deref().and_then(|name| self.class.field(name)) {
            Some(field) => self.field(field),
            None => accessor.return_type.nullable,
        }
    }

    /// A mutator parameter mirrors the field it writes.
    pub fn mutator(&self, mutator: &MethodDescriptor) -> bool {
        match mutator.field.as_deref().and_then(|name| self.class.field(name)) {
            Some(field) => self.field(field),
            None => mutator.parameters.iter().any(|p| p.nullable),
        }
    }

    /// Constructor parameters are optional only when explicitly marked.
    pub fn constructor_parameter(&self, parameter: &Parameter) -> bool {
        parameter.type_ref.nullable
    }
}
