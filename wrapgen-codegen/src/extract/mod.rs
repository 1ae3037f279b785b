//! Metadata extraction: raw class records to class descriptors.
//!
//! Accessors and mutators are bound to their backing fields here, once, by
//! name convention and type equality. Later stages read the resulting
//! `has_accessor`/`has_mutator` flags instead of re-deriving them.

mod signature;

use std::collections::HashSet;

pub use signature::{MAX_TYPE_DEPTH, Signature, parse_signature};
use tracing::debug;
use wrapgen_core::decapitalize;
use wrapgen_ir::{
    ClassDescriptor, ConstructorDescriptor, FieldDescriptor, MethodDescriptor, Parameter, Scalar,
    TypeRef,
};
use wrapgen_manifest::{NullabilityConfig, RawClass, RawMethod, RawParameter};

use crate::{ClassFailure, ExtractionError};

/// `java.lang` types that host sources may spell by simple name.
const JAVA_LANG: &[&str] = &[
    "Boolean",
    "Byte",
    "Character",
    "CharSequence",
    "Double",
    "Float",
    "Integer",
    "Iterable",
    "Long",
    "Number",
    "Object",
    "Short",
    "String",
];

/// `java.lang` throwables that host sources may declare by simple name.
pub const JAVA_LANG_EXCEPTIONS: &[&str] = &[
    "ArithmeticException",
    "ArrayIndexOutOfBoundsException",
    "ArrayStoreException",
    "AssertionError",
    "ClassCastException",
    "ClassNotFoundException",
    "CloneNotSupportedException",
    "Error",
    "Exception",
    "IllegalAccessException",
    "IllegalArgumentException",
    "IllegalMonitorStateException",
    "IllegalStateException",
    "IndexOutOfBoundsException",
    "InstantiationException",
    "InterruptedException",
    "NegativeArraySizeException",
    "NoSuchFieldException",
    "NoSuchMethodException",
    "NullPointerException",
    "NumberFormatException",
    "OutOfMemoryError",
    "ReflectiveOperationException",
    "RuntimeException",
    "SecurityException",
    "StackOverflowError",
    "StringIndexOutOfBoundsException",
    "Throwable",
    "UnsupportedOperationException",
];

/// Converts raw records into class descriptors.
pub struct Extractor<'a> {
    nullability: &'a NullabilityConfig,
    /// Qualified names of every enum record in the batch.
    enums: HashSet<String>,
}

impl<'a> Extractor<'a> {
    /// Create an extractor for one batch of records.
    pub fn new(nullability: &'a NullabilityConfig, records: &[RawClass]) -> Self {
        Self {
            nullability,
            enums: records
                .iter()
                .filter(|r| r.is_enum())
                .map(|r| r.name.clone())
                .collect(),
        }
    }

    /// Extract every record, in order.
    ///
    /// The first record for a qualified name wins; later duplicates fail.
    pub fn extract_all(&self, records: &[RawClass]) -> (Vec<ClassDescriptor>, Vec<ClassFailure>) {
        let mut seen = HashSet::new();
        let mut classes = Vec::new();
        let mut failures = Vec::new();

        for record in records {
            let result = if seen.insert(record.name.as_str()) {
                self.extract(record)
            } else {
                Err(ExtractionError::new(
                    &record.name,
                    "duplicate record for this class; the first definition is used",
                ))
            };
            match result {
                Ok(class) => classes.push(class),
                Err(error) => failures.push(ClassFailure::new(&record.name, error)),
            }
        }

        (classes, failures)
    }

    /// Extract one record.
    pub fn extract(&self, raw: &RawClass) -> Result<ClassDescriptor, ExtractionError> {
        validate_class_name(&raw.name)?;

        if raw.is_enum() {
            return extract_enum(raw);
        }

        let mut class = ClassDescriptor::class(&raw.name);

        for field in raw.fields.iter().filter(|f| !f.is_static()) {
            let member = member_name(&raw.name, &field.name);
            if class.field(&field.name).is_some() {
                return Err(ExtractionError::new(member, "duplicate field"));
            }
            let type_ref = self.declared_type(&field.type_name, &field.annotations, &member)?;
            class.fields.push(FieldDescriptor {
                name: field.name.clone(),
                type_ref,
                is_final: field.is_final(),
                has_accessor: false,
                has_mutator: false,
            });
        }

        for (index, constructor) in raw.public_constructors().enumerate() {
            let parameters = constructor
                .parameters
                .iter()
                .map(|p| self.constructor_parameter(&raw.name, index, p))
                .collect::<Result<Vec<_>, _>>()?;
            class.constructors.push(ConstructorDescriptor { parameters });
        }

        for method in raw.public_methods() {
            self.bind_method(&mut class, method)?;
        }

        Ok(class)
    }

    /// Classify one public method as accessor, mutator, or neither.
    fn bind_method(
        &self,
        class: &mut ClassDescriptor,
        raw: &RawMethod,
    ) -> Result<(), ExtractionError> {
        let member = format!("{}.{}()", class.qualified_name, raw.name);

        if raw.parameters.is_empty() && !raw.returns_void() {
            let return_type = self.declared_type(&raw.returns, &raw.annotations, &member)?;
            let Some(property) = accessor_property(&raw.name, return_type.is_boolean()) else {
                debug!(method = %member, "not an accessor, skipped");
                return Ok(());
            };

            let field = class
                .fields
                .iter_mut()
                .find(|f| {
                    f.name == property && !f.has_accessor && f.type_ref.same_shape(&return_type)
                });
            let bound = field.map(|f| {
                f.has_accessor = true;
                f.name.clone()
            });
            debug!(method = %member, field = ?bound, "accessor");

            class.accessors.push(MethodDescriptor {
                name: raw.name.clone(),
                parameters: Vec::new(),
                return_type,
                declared_exceptions: declared_exceptions(&raw.throws, &member)?,
                field: bound,
            });
            return Ok(());
        }

        if let ([parameter], Some(property)) =
            (raw.parameters.as_slice(), mutator_property(&raw.name))
        {
            let type_ref =
                self.declared_type(&parameter.type_name, &parameter.annotations, &member)?;
            let field = class
                .fields
                .iter_mut()
                .find(|f| f.name == property && !f.has_mutator && f.type_ref.same_shape(&type_ref));
            let Some(field) = field else {
                debug!(method = %member, "setter without a matching field, dropped");
                return Ok(());
            };
            field.has_mutator = true;
            let bound = field.name.clone();
            debug!(method = %member, field = %bound, "mutator");

            let return_type = if raw.returns_void() {
                TypeRef::void()
            } else {
                self.type_ref(&raw.returns, &member)?
            };
            class.mutators.push(MethodDescriptor {
                name: raw.name.clone(),
                parameters: vec![type_ref],
                return_type,
                declared_exceptions: declared_exceptions(&raw.throws, &member)?,
                field: Some(bound),
            });
            return Ok(());
        }

        debug!(method = %member, "not part of the data shape, skipped");
        Ok(())
    }

    /// Constructor parameters are present unless explicitly marked nullable.
    fn constructor_parameter(
        &self,
        class: &str,
        index: usize,
        raw: &RawParameter,
    ) -> Result<Parameter, ExtractionError> {
        let member = format!("{}.<init>#{}.{}", class, index, raw.name);
        if raw.name.is_empty() {
            return Err(ExtractionError::new(member, "constructor parameter has no name"));
        }
        let type_ref = self.type_ref(&raw.type_name, &member)?;
        let nullable = self.nullability.is_nullable(&raw.annotations);
        Ok(Parameter {
            name: raw.name.clone(),
            type_ref: type_ref.with_nullable(nullable),
        })
    }

    /// A member type is nullable unless a non-null marker is present.
    ///
    /// An explicit nullable marker wins over a non-null one.
    fn declared_type(
        &self,
        type_name: &str,
        annotations: &[String],
        member: &str,
    ) -> Result<TypeRef, ExtractionError> {
        let type_ref = self.type_ref(type_name, member)?;
        let nullable = self.nullability.is_nullable(annotations)
            || !self.nullability.is_non_null(annotations);
        Ok(type_ref.with_nullable(nullable))
    }

    fn type_ref(&self, type_name: &str, member: &str) -> Result<TypeRef, ExtractionError> {
        if type_name.trim() == "void" {
            return Err(ExtractionError::new(member, "`void` is not a value type"));
        }
        let signature =
            parse_signature(type_name).map_err(|reason| ExtractionError::new(member, reason))?;
        Ok(self.signature_to_type_ref(&signature))
    }

    /// Type arguments start nullable; no marker can be expressed on them.
    fn signature_to_type_ref(&self, signature: &Signature) -> TypeRef {
        let name = normalize_name(&signature.name);

        if !signature.args.is_empty() {
            let args = signature
                .args
                .iter()
                .map(|arg| self.signature_to_type_ref(arg))
                .collect();
            return TypeRef::parameterized(name, args);
        }

        if let Some(scalar) = Scalar::from_primitive(&name) {
            TypeRef::primitive(scalar)
        } else if let Some(scalar) = Scalar::from_boxed(&name) {
            TypeRef::boxed(scalar)
        } else if self.enums.contains(&name) {
            TypeRef::enumeration(name)
        } else {
            TypeRef::class(name)
        }
    }
}

fn extract_enum(raw: &RawClass) -> Result<ClassDescriptor, ExtractionError> {
    let mut seen = HashSet::new();
    for constant in &raw.constants {
        let member = member_name(&raw.name, constant);
        if !is_java_identifier(constant) {
            return Err(ExtractionError::new(member, "invalid enum constant name"));
        }
        if !seen.insert(constant.as_str()) {
            return Err(ExtractionError::new(member, "duplicate enum constant"));
        }
    }
    Ok(ClassDescriptor::enumeration(&raw.name, &raw.constants))
}

/// The property name of a getter (`getFirstName` -> `firstName`).
///
/// `isX` is an accessor only for boolean returns. `getClass` is never one.
pub fn accessor_property(method: &str, returns_boolean: bool) -> Option<String> {
    if method == "getClass" {
        return None;
    }
    let suffix = method
        .strip_prefix("get")
        .or_else(|| method.strip_prefix("is").filter(|_| returns_boolean))?;
    property_from_suffix(suffix)
}

/// The property name of a setter (`setLastName` -> `lastName`).
pub fn mutator_property(method: &str) -> Option<String> {
    property_from_suffix(method.strip_prefix("set")?)
}

fn property_from_suffix(suffix: &str) -> Option<String> {
    suffix
        .starts_with(|c: char| c.is_uppercase() || c == '_' || c == '$')
        .then(|| decapitalize(suffix))
}

fn normalize_name(name: &str) -> String {
    let element = name.trim_end_matches("[]");
    if JAVA_LANG.contains(&element) {
        format!("java.lang.{}", name)
    } else {
        name.to_string()
    }
}

/// Qualify declared exceptions; a simple name must be a known `java.lang` type.
fn declared_exceptions(throws: &[String], member: &str) -> Result<Vec<String>, ExtractionError> {
    throws
        .iter()
        .map(|name| {
            let name = name.trim();
            if name.contains('.') {
                if !name.split('.').all(is_java_identifier) {
                    return Err(ExtractionError::new(
                        member,
                        format!("malformed exception name `{}`", name),
                    ));
                }
                Ok(name.to_string())
            } else if JAVA_LANG_EXCEPTIONS.contains(&name) {
                Ok(format!("java.lang.{}", name))
            } else {
                Err(ExtractionError::new(
                    member,
                    format!("exception `{}` must be fully qualified", name),
                ))
            }
        })
        .collect()
}

fn member_name(class: &str, member: &str) -> String {
    format!("{}.{}", class, member)
}

fn validate_class_name(name: &str) -> Result<(), ExtractionError> {
    if name.is_empty() {
        return Err(ExtractionError::new("<unnamed>", "record has no class name"));
    }
    if !name.split('.').all(is_java_identifier) {
        return Err(ExtractionError::new(name, "malformed qualified class name"));
    }
    Ok(())
}

fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
