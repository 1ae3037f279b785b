//! Resolved classes: mapped types, nullability and final names per member.
//!
//! A [`ResolvedClass`] is derived from a [`ClassDescriptor`] without
//! mutating it, and is everything an emitter needs to render one file.

mod names;

use std::collections::HashMap;

pub use names::NameScope;
use tracing::debug;
use wrapgen_core::decapitalize;
use wrapgen_ir::{ClassDescriptor, MethodDescriptor, TypeRef};

use crate::{
    ClassRegistry, EmissionError, GenerateError, NamingCollisionError, NamingConvention,
    TypeMapper, extract::accessor_property, mapping::map_type, nullability::NullabilityResolver,
};

/// Names the generated enum companion defines.
const ENUM_COMPANION_MEMBERS: &[&str] = &["values", "fromJava", "toJava"];

/// A member type after mapping and nullability.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedType<T> {
    /// The host type as extracted.
    pub host: TypeRef,
    /// The mapped type, never optional-wrapped.
    pub mapped: T,
    /// The type as it appears in the generated signature.
    pub target: T,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameter<T> {
    pub host_name: String,
    pub name: String,
    pub ty: ResolvedType<T>,
}

/// One wrapper constructor, mirroring one host constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConstructor<T> {
    pub parameters: Vec<ResolvedParameter<T>>,
}

/// An exposed accessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAccessor<T> {
    /// Host method to call.
    pub host_method: String,
    pub name: String,
    pub ty: ResolvedType<T>,
    pub exceptions: Vec<String>,
    /// Bound field, `None` for computed accessors.
    pub field: Option<String>,
}

/// An exposed mutator.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMutator<T> {
    pub host_method: String,
    pub name: String,
    /// The parameter type.
    pub ty: ResolvedType<T>,
    pub exceptions: Vec<String>,
    pub field: String,
}

/// An enum constant and its generated name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConstant {
    pub host: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedKind<T> {
    Enum {
        /// Declaration order.
        constants: Vec<ResolvedConstant>,
    },
    Class {
        constructors: Vec<ResolvedConstructor<T>>,
        /// Bound accessors in field order, then unbound in declaration order.
        accessors: Vec<ResolvedAccessor<T>>,
        mutators: Vec<ResolvedMutator<T>>,
    },
}

/// A class ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedClass<'a, T> {
    pub descriptor: &'a ClassDescriptor,
    /// Wrapper package.
    pub package: String,
    /// Wrapper type name, escaped if needed.
    pub name: String,
    /// File name without extension.
    pub file_stem: String,
    pub kind: ResolvedKind<T>,
}

impl<T> ResolvedClass<'_, T> {
    pub fn qualified_name(&self) -> &str {
        &self.descriptor.qualified_name
    }
}

/// Derives [`ResolvedClass`]es against one immutable registry.
pub struct Resolver<'a, M> {
    mapper: &'a M,
    naming: &'a NamingConvention,
    registry: &'a ClassRegistry,
}

impl<'a, M: TypeMapper> Resolver<'a, M> {
    pub fn new(mapper: &'a M, naming: &'a NamingConvention, registry: &'a ClassRegistry) -> Self {
        Self {
            mapper,
            naming,
            registry,
        }
    }

    /// Resolve one registered class.
    pub fn resolve<'c>(
        &self,
        class: &'c ClassDescriptor,
    ) -> Result<ResolvedClass<'c, M::Target>, GenerateError> {
        let entry = self.registry.lookup(&class.qualified_name).ok_or_else(|| {
            EmissionError::new(&class.qualified_name, "class is missing from the registry")
        })?;

        let type_name = self.naming.type_name(&entry.wrapper_name);
        let name = self.naming.safe_name(&type_name).ok_or_else(|| {
            NamingCollisionError::new(&type_name, "wrapper type name is not a legal identifier")
        })?;

        let kind = if class.is_enum {
            self.resolve_enum(class)?
        } else {
            ClassResolution {
                resolver: self,
                class,
                package: &entry.wrapper_package,
                nullability: NullabilityResolver::new(class),
            }
            .resolve()?
        };
        debug!(class = %class.qualified_name, wrapper = %name, "resolved");

        Ok(ResolvedClass {
            descriptor: class,
            package: entry.wrapper_package.clone(),
            file_stem: self.naming.file_name(&type_name),
            name,
            kind,
        })
    }

    fn resolve_enum(
        &self,
        class: &ClassDescriptor,
    ) -> Result<ResolvedKind<M::Target>, GenerateError> {
        let mut scope = NameScope::members(self.naming);
        scope.reserve(ENUM_COMPANION_MEMBERS);
        let constants = class
            .enum_constants
            .iter()
            .map(|host| {
                Ok(ResolvedConstant {
                    host: host.clone(),
                    name: scope.claim(host)?,
                })
            })
            .collect::<Result<Vec<_>, NamingCollisionError>>()?;
        Ok(ResolvedKind::Enum { constants })
    }
}

/// State for resolving the members of one non-enum class.
struct ClassResolution<'r, 'c, M> {
    resolver: &'r Resolver<'r, M>,
    class: &'c ClassDescriptor,
    package: &'r str,
    nullability: NullabilityResolver<'c>,
}

impl<M: TypeMapper> ClassResolution<'_, '_, M> {
    fn resolve(&self) -> Result<ResolvedKind<M::Target>, GenerateError> {
        let constructors = self
            .class
            .constructors
            .iter()
            .enumerate()
            .map(|(index, constructor)| {
                let mut scope = NameScope::plain(self.resolver.naming);
                let parameters = constructor
                    .parameters
                    .iter()
                    .map(|p| {
                        let member =
                            format!("{}.<init>#{}.{}", self.class.qualified_name, index, p.name);
                        let nullable = self.nullability.constructor_parameter(p);
                        Ok(ResolvedParameter {
                            host_name: p.name.clone(),
                            name: scope.claim(&self.resolver.naming.member_name(&p.name))?,
                            ty: self.resolve_type(&p.type_ref, nullable, &member)?,
                        })
                    })
                    .collect::<Result<Vec<_>, GenerateError>>()?;
                Ok(ResolvedConstructor { parameters })
            })
            .collect::<Result<Vec<_>, GenerateError>>()?;
        self.check_constructor_signatures(&constructors)?;

        let mut scope = NameScope::members(self.resolver.naming);
        let mut accessors = Vec::new();
        for field in self.class.fields.iter().filter(|f| f.has_accessor) {
            let accessor = self.class.accessor_for(&field.name).ok_or_else(|| {
                self.emission_error(format!(
                    "field `{}` is marked accessible but has no accessor",
                    field.name
                ))
            })?;
            accessors.push(self.accessor(accessor, &field.name, &mut scope)?);
        }
        for accessor in self.class.unbound_accessors() {
            let property = accessor_property(&accessor.name, accessor.return_type.is_boolean())
                .unwrap_or_else(|| decapitalize(&accessor.name));
            accessors.push(self.accessor(accessor, &property, &mut scope)?);
        }

        let mut mutators = Vec::new();
        for field in self.class.fields.iter().filter(|f| f.has_mutator) {
            let mutator = self.class.mutator_for(&field.name).ok_or_else(|| {
                self.emission_error(format!(
                    "field `{}` is marked mutable but has no mutator",
                    field.name
                ))
            })?;
            mutators.push(self.mutator(mutator, &field.name, &mut scope)?);
        }

        Ok(ResolvedKind::Class {
            constructors,
            accessors,
            mutators,
        })
    }

    fn accessor(
        &self,
        method: &MethodDescriptor,
        property: &str,
        scope: &mut NameScope<'_>,
    ) -> Result<ResolvedAccessor<M::Target>, GenerateError> {
        let member = format!("{}.{}()", self.class.qualified_name, method.name);
        let nullable = self.nullability.accessor(method);
        Ok(ResolvedAccessor {
            host_method: method.name.clone(),
            name: scope.claim(&self.resolver.naming.member_name(property))?,
            ty: self.resolve_type(&method.return_type, nullable, &member)?,
            exceptions: method.declared_exceptions.clone(),
            field: method.field.clone(),
        })
    }

    fn mutator(
        &self,
        method: &MethodDescriptor,
        field: &str,
        scope: &mut NameScope<'_>,
    ) -> Result<ResolvedMutator<M::Target>, GenerateError> {
        let member = format!("{}.{}()", self.class.qualified_name, method.name);
        let [parameter] = method.parameters.as_slice() else {
            return Err(self
                .emission_error(format!(
                    "mutator `{}` does not take exactly one parameter",
                    method.name
                ))
                .into());
        };
        let nullable = self.nullability.mutator(method);
        Ok(ResolvedMutator {
            host_method: method.name.clone(),
            name: scope.claim(&self.resolver.naming.member_name(&method.name))?,
            ty: self.resolve_type(parameter, nullable, &member)?,
            exceptions: method.declared_exceptions.clone(),
            field: field.to_string(),
        })
    }

    fn resolve_type(
        &self,
        host: &TypeRef,
        nullable: bool,
        member: &str,
    ) -> Result<ResolvedType<M::Target>, GenerateError> {
        let mapper = self.resolver.mapper;
        let mapped = map_type(mapper, self.resolver.registry, self.package, host, member)?;
        let target = if nullable {
            mapper.map_optional(mapped.clone())
        } else {
            mapped.clone()
        };
        Ok(ResolvedType {
            host: host.clone(),
            mapped,
            target,
            nullable,
        })
    }

    /// Two constructors with one runtime signature cannot both be emitted.
    ///
    /// The wrapper's primary constructor takes the host instance and counts too.
    fn check_constructor_signatures(
        &self,
        constructors: &[ResolvedConstructor<M::Target>],
    ) -> Result<(), NamingCollisionError> {
        let mapper = self.resolver.mapper;
        let primary = vec![mapper.host_erasure(&self.class.qualified_name)];
        let mut seen: HashMap<Vec<String>, Option<usize>> = HashMap::from([(primary, None)]);

        for (index, constructor) in constructors.iter().enumerate() {
            let erased: Vec<String> = constructor
                .parameters
                .iter()
                .map(|p| mapper.erasure(&p.ty.target))
                .collect();
            if let Some(previous) = seen.get(&erased) {
                let clash = match previous {
                    Some(other) => format!("constructor #{}", other),
                    None => "the wrapper's primary constructor".to_string(),
                };
                return Err(NamingCollisionError::new(
                    format!("{}.<init>#{}", self.class.qualified_name, index),
                    format!("erases to ({}), same as {}", erased.join(", "), clash),
                ));
            }
            seen.insert(erased, Some(index));
        }
        Ok(())
    }

    fn emission_error(&self, message: String) -> EmissionError {
        EmissionError::new(&self.class.qualified_name, message)
    }
}
