//! Type mapping precedence.
//!
//! [`map_type`] decides *which* rule applies to a host type reference; the
//! [`TypeMapper`] builds the target expression for that rule. Rules are
//! checked in order and the first match wins:
//!
//! 1. primitive and boxed scalars
//! 2. batch enums
//! 3. supported collections, mapped argument by argument
//! 4. batch classes
//! 5. configured external types
//!
//! Anything else is an [`UnresolvedTypeError`].

use serde::Serialize;
use wrapgen_ir::{TypeKind, TypeRef};

use crate::{ClassRegistry, TypeMapper, UnresolvedTypeError};

/// Host collection shapes with a target counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CollectionShape {
    List,
    Set,
    /// Keys keep their insertion order.
    Map,
}

impl CollectionShape {
    /// Recognize a raw host type applied to `arity` arguments.
    pub fn of(name: &str, arity: usize) -> Option<Self> {
        let shape = match name {
            "java.util.List" | "java.util.Collection" | "java.lang.Iterable" => Self::List,
            "java.util.Set" => Self::Set,
            "java.util.Map" => Self::Map,
            _ => return None,
        };
        (shape.arity() == arity).then_some(shape)
    }

    /// Number of type arguments the shape takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::List | Self::Set => 1,
            Self::Map => 2,
        }
    }
}

/// Map one host type reference, ignoring its top-level nullability.
///
/// Type arguments are mapped by structural recursion; extraction caps the
/// nesting at [`MAX_TYPE_DEPTH`](crate::extract::MAX_TYPE_DEPTH). Collection
/// elements are never wrapped in the optional representation.
pub fn map_type<M: TypeMapper>(
    mapper: &M,
    registry: &ClassRegistry,
    from_package: &str,
    type_ref: &TypeRef,
    member: &str,
) -> Result<M::Target, UnresolvedTypeError> {
    let unresolved = || UnresolvedTypeError {
        member: member.to_string(),
        type_name: type_ref.to_string(),
    };

    match type_ref.kind {
        TypeKind::Primitive | TypeKind::BoxedPrimitive => {
            let scalar = type_ref.scalar().ok_or_else(unresolved)?;
            Ok(mapper.map_scalar(scalar, type_ref.kind == TypeKind::BoxedPrimitive))
        }
        TypeKind::Parameterized => {
            let shape = CollectionShape::of(&type_ref.name, type_ref.type_arguments.len())
                .ok_or_else(unresolved)?;
            let args = type_ref
                .type_arguments
                .iter()
                .map(|arg| map_type(mapper, registry, from_package, arg, member))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(mapper.map_collection(shape, args))
        }
        TypeKind::Enum | TypeKind::UserClass => {
            if let Some(entry) = registry.lookup(&type_ref.name) {
                return Ok(if entry.is_enum {
                    mapper.map_enum(entry, from_package)
                } else {
                    mapper.map_class(entry, from_package)
                });
            }
            registry
                .external(&type_ref.name)
                .map(|target| mapper.map_external(&type_ref.name, target))
                .ok_or_else(unresolved)
        }
    }
}

/// Map a member type, wrapping it in the optional representation when absent
/// values are possible.
pub fn map_member_type<M: TypeMapper>(
    mapper: &M,
    registry: &ClassRegistry,
    from_package: &str,
    type_ref: &TypeRef,
    nullable: bool,
    member: &str,
) -> Result<M::Target, UnresolvedTypeError> {
    let target = map_type(mapper, registry, from_package, type_ref, member)?;
    Ok(if nullable {
        mapper.map_optional(target)
    } else {
        target
    })
}
